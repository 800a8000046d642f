/// Compression applied to blobs before they are published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// Gzip with the given level (0-9); blobs are named `<hash>.gz`
    Gzip(u32),
    /// Raw bytes; blobs are named `<hash>`
    Uncompressed,
}

impl Default for CompressionType {
    fn default() -> Self {
        // zlib's default level
        Self::Gzip(6)
    }
}

impl CompressionType {
    /// Maximum compression (slower write, smallest blobs)
    pub fn max_compression() -> Self {
        Self::Gzip(9)
    }

    /// Balanced compression (default)
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Fast compression (faster write, larger blobs)
    pub fn fast() -> Self {
        Self::Gzip(1)
    }

    /// Returns true if blobs are gzip-compressed
    pub fn is_compressed(&self) -> bool {
        matches!(self, CompressionType::Gzip(_))
    }

    pub(super) fn to_flate2(self) -> flate2::Compression {
        match self {
            CompressionType::Gzip(level) => flate2::Compression::new(level.min(9)),
            CompressionType::Uncompressed => flate2::Compression::none(),
        }
    }
}
