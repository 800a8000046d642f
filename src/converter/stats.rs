use std::fmt;
use std::path::PathBuf;

use crate::blob::BlobStoreStats;
use crate::model::DatasetKind;
use crate::serializer::SerializerStats;

/// Outcome of a completed conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionStats {
    /// Dataset name recorded in the index metadata
    pub name: String,

    /// Directory holding `index.json` and `data/`
    pub output_dir: PathBuf,

    /// Kind of the root dataset; `None` when the root kind was unsupported
    pub root_kind: Option<DatasetKind>,

    /// Array counters from the serializer
    pub arrays: SerializerStats,

    /// Blob counters from the store
    pub blobs: BlobStoreStats,
}

impl ConversionStats {
    /// Total number of arrays referenced by the index
    pub fn arrays_written(&self) -> usize {
        self.arrays.arrays_serialized
    }

    /// Ratio of stored to raw bytes, 1.0 when nothing was stored
    pub fn compression_ratio(&self) -> f64 {
        if self.blobs.raw_bytes == 0 {
            return 1.0;
        }
        self.blobs.stored_bytes as f64 / self.blobs.raw_bytes as f64
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.root_kind.map_or("unsupported", |k| k.name());
        write!(
            f,
            "{} ({}): {} arrays, {} skipped, {}",
            self.name, kind, self.arrays.arrays_serialized, self.arrays.arrays_skipped, self.blobs
        )
    }
}
