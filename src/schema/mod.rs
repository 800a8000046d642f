//! # Index Document Schema
//!
//! Serializable types for the `index.json` document written next to the blob
//! pool of each converted dataset.
//!
//! ## Layout
//!
//! ```text
//! {
//!   "metadata": { "name": "can.ex2" },
//!   "type": "PolyData",
//!   "PolyData": {
//!     "Points": { ...array descriptor... },
//!     "Cells": { "Polys": { ...array descriptor... } },
//!     "PointData": { "Normals": { ... } },
//!     "CellData": {},
//!     "FieldData": {}
//!   }
//! }
//! ```
//!
//! ## Array Descriptors
//!
//! Every array is stored once as a blob under `data/` and referenced by its
//! content hash:
//!
//! | Field | Description |
//! |-------|-------------|
//! | ref.id | Hex MD5 of the stored bytes |
//! | ref.encode | `BigEndian` or `LittleEndian` |
//! | ref.basepath | Blob directory relative to the dataset directory |
//! | type | `DataArray` or `StringArray` |
//! | name | Array name |
//! | dataType | Typed-array name (`Float32Array`, ...) or `JSON` |
//! | tuple | Components per tuple |
//! | size | Components times tuples |
//! | ranges | Per-component min/max (DataArray only) |
//!
//! Object key order follows the source enumeration order so that repeated
//! conversions of the same dataset produce identical documents.

mod constants;
mod descriptor;
mod nodes;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use descriptor::{
    ArrayDescriptor, ArrayType, BlobRef, ByteOrder, ComponentRange, DataType, OutputKind,
};
pub use nodes::{
    ArrayMap, AttributeNodes, BlockEntry, CellsNode, DatasetNode, ImageDataNode, IndexDocument,
    IndexMetadata, MultiBlockNode, PolyDataNode, RectilinearGridNode, TableNode,
    UnstructuredGridNode,
};
