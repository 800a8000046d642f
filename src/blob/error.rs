/// Errors that can occur while storing blobs
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// I/O error while writing or publishing a blob
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The blob directory does not exist
    #[error("Blob directory does not exist: {0}")]
    MissingDirectory(String),
}
