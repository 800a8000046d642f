//! # In-memory Dataset Model
//!
//! These types describe the dataset an external geometry engine hands to the
//! converter. Reading native mesh formats, merging blocks and extracting
//! surfaces all happen before a [`DataObject`] reaches this crate; the model
//! only carries what the serializer needs:
//!
//! - numeric arrays ([`TypedArray`]) with their native [`ScalarType`]
//! - textual arrays ([`StringArray`])
//! - the three attribute buckets of a dataset ([`AttributeSet`])
//! - the kind-specific geometric payload of each [`Dataset`] variant
//!
//! Composite datasets ([`MultiBlock`]) nest further [`DataObject`]s. A block
//! whose kind this crate does not know is carried as
//! [`DataObject::Unsupported`] with the engine's kind name, so the index can
//! still enumerate it.

mod array;
mod dataset;
mod scalar;


pub use array::{Array, AttributeSet, StringArray, TypedArray};
pub use dataset::{
    Block, DataObject, Dataset, DatasetKind, ImageData, MultiBlock, PolyData, RectilinearGrid,
    Table, UnstructuredGrid,
};
pub use scalar::{ArrayValues, ScalarType};
