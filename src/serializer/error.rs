use crate::blob::BlobError;
use crate::model::ScalarType;

/// Errors that can occur while serializing a dataset
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// A numeric array's element type has no output mapping
    #[error("Unsupported scalar type {scalar_type} for array '{array}'")]
    UnsupportedScalarType {
        /// Native element type of the array
        scalar_type: ScalarType,
        /// Name of the offending array
        array: String,
    },

    /// The element count is not a whole number of tuples
    #[error(
        "Malformed array '{array}': {len} elements is not a multiple of {components} components"
    )]
    MalformedArray {
        /// Name of the offending array
        array: String,
        /// Number of elements in the buffer
        len: usize,
        /// Declared components per tuple
        components: usize,
    },

    /// Error from the blob store
    #[error("Blob store error: {0}")]
    BlobError(#[from] BlobError),

    /// Error encoding a string array as JSON
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}
