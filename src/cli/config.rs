//! TOML configuration file support.
//!
//! Conversion settings can be kept in a file instead of passed as flags:
//!
//! ```toml
//! # dsindex.toml
//! [conversion]
//! compress = true
//! compression_level = 9
//! byte_order = "LittleEndian"
//! skip_unsupported_arrays = true
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use dsindex::converter::{CompressionType, ConverterConfig, UnsupportedArrayPolicy};
use dsindex::schema::ByteOrder;

/// Root configuration structure for dsindex.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Settings applied to every conversion of a run.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig {
    /// Gzip the blobs.
    pub compress: Option<bool>,

    /// Gzip level (0-9).
    pub compression_level: Option<u32>,

    /// Byte order of numeric blobs.
    pub byte_order: Option<ByteOrder>,

    /// Omit attribute arrays with unsupported element types instead of failing.
    pub skip_unsupported_arrays: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl ConversionConfig {
    /// Merge file values and command-line overrides into a converter config.
    pub fn resolve(&self, uncompressed: bool, compression_level: Option<u32>) -> ConverterConfig {
        let compress = !uncompressed && self.compress.unwrap_or(true);
        let level = compression_level.or(self.compression_level);

        let compression = match (compress, level) {
            (false, _) => CompressionType::Uncompressed,
            (true, Some(level)) => CompressionType::Gzip(level.min(9)),
            (true, None) => CompressionType::default(),
        };
        let unsupported_arrays = if self.skip_unsupported_arrays.unwrap_or(false) {
            UnsupportedArrayPolicy::Skip
        } else {
            UnsupportedArrayPolicy::Abort
        };

        ConverterConfig {
            compression,
            byte_order: self.byte_order.unwrap_or_default(),
            unsupported_arrays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            compress = true
            compression_level = 9
            byte_order = "BigEndian"
            skip_unsupported_arrays = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.compress, Some(true));
        assert_eq!(config.conversion.compression_level, Some(9));
        assert_eq!(config.conversion.byte_order, Some(ByteOrder::BigEndian));
        assert_eq!(config.conversion.skip_unsupported_arrays, Some(true));

        let resolved = config.conversion.resolve(false, None);
        assert_eq!(resolved.compression, CompressionType::Gzip(9));
        assert_eq!(resolved.byte_order, ByteOrder::BigEndian);
        assert_eq!(resolved.unsupported_arrays, UnsupportedArrayPolicy::Skip);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [conversion]
            compress = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.compress, Some(false));
        assert_eq!(config.conversion.compression_level, None);
        assert_eq!(
            config.conversion.resolve(false, Some(3)).compression,
            CompressionType::Uncompressed
        );
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.conversion.resolve(false, None), ConverterConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config::from_str("[conversion]\ncompression_level = 2").unwrap();
        assert_eq!(
            config.conversion.resolve(false, Some(7)).compression,
            CompressionType::Gzip(7)
        );
        assert_eq!(
            config.conversion.resolve(true, Some(7)).compression,
            CompressionType::Uncompressed
        );
    }

    #[test]
    fn test_invalid_byte_order() {
        assert!(Config::from_str("[conversion]\nbyte_order = \"Middle\"").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_str("[conversion]\nrow_group_size = 10").is_err());
    }
}
