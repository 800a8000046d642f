use crate::blob::CompressionType;
use crate::schema::ByteOrder;
use crate::serializer::UnsupportedArrayPolicy;

/// Settings for one conversion run
///
/// # Example
///
/// ```rust
/// use dsindex::converter::{ConverterConfig, UnsupportedArrayPolicy};
///
/// let config = ConverterConfig {
///     unsupported_arrays: UnsupportedArrayPolicy::Skip,
///     ..ConverterConfig::fast()
/// };
/// assert!(config.compression.is_compressed());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Compression applied to every blob (default: gzip level 6)
    pub compression: CompressionType,

    /// Byte order of numeric blobs (default: host native)
    pub byte_order: ByteOrder,

    /// Handling of attribute arrays with unsupported element types
    pub unsupported_arrays: UnsupportedArrayPolicy,
}

impl ConverterConfig {
    /// Write blobs without compression
    pub fn uncompressed() -> Self {
        Self {
            compression: CompressionType::Uncompressed,
            ..Default::default()
        }
    }

    /// Fastest gzip level
    pub fn fast() -> Self {
        Self {
            compression: CompressionType::fast(),
            ..Default::default()
        }
    }

    /// Smallest output
    pub fn max_compression() -> Self {
        Self {
            compression: CompressionType::max_compression(),
            ..Default::default()
        }
    }
}
