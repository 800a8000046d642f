use crate::serializer::SerializeError;

/// Errors that can occur while converting a dataset
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// I/O error creating the output directories or the index
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error serializing the dataset tree or its arrays
    #[error("Serialization error: {0}")]
    SerializeError(#[from] SerializeError),

    /// Error writing the index document
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// No usable dataset name could be derived
    #[error("Invalid dataset name: {0}")]
    InvalidName(String),
}

impl From<crate::blob::BlobError> for ConvertError {
    fn from(err: crate::blob::BlobError) -> Self {
        ConvertError::SerializeError(SerializeError::from(err))
    }
}
