//! # Conversion Pipeline
//!
//! Turns one in-memory dataset into a self-describing directory:
//!
//! ```text
//! <output_dir>/<name>/
//! ├── index.json
//! └── data/
//!     └── <md5>[.gz]
//! ```
//!
//! The dataset name is the rename override when given, otherwise the base
//! name of the source file. Creating the directories is idempotent, so a
//! dataset can be converted again into the same location; blobs already
//! present are reused.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dsindex::converter::{ConverterConfig, DatasetConverter};
//! use dsindex::model::{Table, TypedArray};
//!
//! let table = Table::new().with_column(TypedArray::new("x", 1, vec![1.0f32, 2.0]));
//! let converter = DatasetConverter::new(ConverterConfig::default());
//! let stats = converter.convert("points.csv", &table.into(), "out", None)?;
//! println!("{}", stats);
//! # Ok::<(), dsindex::converter::ConvertError>(())
//! ```

mod config;
mod error;
mod stats;

#[cfg(test)]
mod tests;

pub use crate::blob::CompressionType;
pub use crate::serializer::UnsupportedArrayPolicy;
pub use config::ConverterConfig;
pub use error::ConvertError;
pub use stats::ConversionStats;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path};

use log::{info, warn};

use crate::blob::BlobStore;
use crate::model::DataObject;
use crate::schema::{IndexDocument, DATA_DIR_NAME, INDEX_FILE_NAME};
use crate::serializer::DatasetSerializer;

/// Converts datasets into index directories
#[derive(Debug, Clone, Default)]
pub struct DatasetConverter {
    config: ConverterConfig,
}

impl DatasetConverter {
    /// Create a converter with the given configuration
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Run configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `object`, naming it after `source` unless `rename` is given.
    ///
    /// # Arguments
    ///
    /// * `source` - Path the dataset was read from; only its base name is used
    /// * `object` - The materialized dataset
    /// * `output_dir` - Root under which the dataset directory is created
    /// * `rename` - Optional dataset name overriding the source base name
    ///
    /// # Errors
    ///
    /// Fails with [`ConvertError::InvalidName`] if no usable name can be
    /// derived, and with the underlying error on any I/O or serialization
    /// failure. Blobs written before a failure are left in place.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        object: &DataObject,
        output_dir: Q,
        rename: Option<&str>,
    ) -> Result<ConversionStats, ConvertError> {
        let name = dataset_name(source.as_ref(), rename)?;
        self.convert_named(&name, object, output_dir)
    }

    /// Convert `object` into `<output_dir>/<name>/`
    pub fn convert_named<Q: AsRef<Path>>(
        &self,
        name: &str,
        object: &DataObject,
        output_dir: Q,
    ) -> Result<ConversionStats, ConvertError> {
        validate_name(name)?;

        let dataset_dir = output_dir.as_ref().join(name);
        let data_dir = dataset_dir.join(DATA_DIR_NAME);
        fs::create_dir_all(&data_dir)?;

        info!("Converting {} into {}", name, dataset_dir.display());

        let mut store = BlobStore::new(
            &data_dir,
            DATA_DIR_NAME,
            self.config.compression,
            self.config.byte_order,
        )?;
        let mut document = IndexDocument::new(name);

        let (root_kind, arrays) = {
            let mut serializer =
                DatasetSerializer::new(&mut store, self.config.unsupported_arrays);
            let root_kind = match object {
                DataObject::Dataset(dataset) => {
                    document.dataset = Some(serializer.serialize_dataset(dataset)?);
                    Some(dataset.kind())
                }
                DataObject::Unsupported(kind) => {
                    warn!("{} is not supported, writing metadata only", kind);
                    None
                }
            };
            (root_kind, serializer.stats())
        };

        write_index(&dataset_dir.join(INDEX_FILE_NAME), &document)?;

        let stats = ConversionStats {
            name: name.to_string(),
            output_dir: dataset_dir,
            root_kind,
            arrays,
            blobs: store.stats(),
        };
        info!("Converted {}", stats);
        Ok(stats)
    }
}

fn dataset_name(source: &Path, rename: Option<&str>) -> Result<String, ConvertError> {
    if let Some(name) = rename {
        return Ok(name.to_string());
    }
    source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| ConvertError::InvalidName(source.to_string_lossy().to_string()))
}

fn validate_name(name: &str) -> Result<(), ConvertError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ConvertError::InvalidName(name.to_string())),
    }
}

fn write_index(path: &Path, document: &IndexDocument) -> Result<(), ConvertError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
