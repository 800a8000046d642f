//! # Dataset Serializer
//!
//! Walks a [`Dataset`](crate::model::Dataset) top-down and produces its
//! [`DatasetNode`](crate::schema::DatasetNode), storing every array in the
//! [`BlobStore`] on the way:
//!
//! ```text
//! serialize_dataset ──> one arm per DatasetKind (MultiBlock recurses)
//!        │
//!        └──> serialize_attributes ──> serialize_array
//!                                        ├──> serialize_data_array   (numeric)
//!                                        └──> serialize_string_array (text)
//!                                                   │
//!                                                   └──> BlobStore::write
//! ```
//!
//! ## Numeric Arrays
//!
//! The native element type is mapped to an output typed-array kind by
//! [`output_kind`]. Index arrays ([`ScalarType::IdType`](crate::model::ScalarType))
//! are narrowed to unsigned 32-bit first, with every negative value becoming
//! `u32::MAX`. Elements are encoded in the run's byte order and the encoded
//! bytes are what gets hashed and stored.
//!
//! ## Unsupported Element Types
//!
//! By default an array whose element type has no output kind aborts the
//! whole conversion. With [`UnsupportedArrayPolicy::Skip`] such arrays are
//! left out of attribute buckets and table columns instead; structural arrays
//! (points, connectivity, coordinates) always abort.

mod array;
mod attributes;
mod dataset;
mod error;


pub use array::{component_ranges, encode_values, narrow_ids, output_kind};
pub use error::SerializeError;

use crate::blob::BlobStore;

/// What to do with an attribute array whose element type cannot be stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsupportedArrayPolicy {
    /// Fail the conversion
    #[default]
    Abort,
    /// Log and omit the array
    Skip,
}

/// Counters accumulated by a [`DatasetSerializer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializerStats {
    /// Arrays turned into descriptors
    pub arrays_serialized: usize,
    /// Arrays left out under [`UnsupportedArrayPolicy::Skip`]
    pub arrays_skipped: usize,
}

/// Serializes datasets into index nodes, writing their arrays to a blob store
pub struct DatasetSerializer<'a> {
    store: &'a mut BlobStore,
    policy: UnsupportedArrayPolicy,
    stats: SerializerStats,
}

impl<'a> DatasetSerializer<'a> {
    /// Create a serializer writing into `store`
    pub fn new(store: &'a mut BlobStore, policy: UnsupportedArrayPolicy) -> Self {
        Self {
            store,
            policy,
            stats: SerializerStats::default(),
        }
    }

    /// Counters so far
    pub fn stats(&self) -> SerializerStats {
        self.stats
    }
}
