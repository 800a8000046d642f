//! # dsindex - Content-Addressed Dataset Index Writer
//!
//! `dsindex` converts in-memory scientific datasets (meshes, grids, tables
//! and composites of them) into a directory that a web viewer can load
//! lazily: a single `index.json` describing the structure, plus one
//! content-addressed blob per array.
//!
//! ## Key Features
//!
//! - **Six dataset kinds**: `PolyData`, `UnstructuredGrid`, `ImageData`,
//!   `RectilinearGrid`, `Table` and recursive `MultiBlock` composites.
//!
//! - **Deduplicated storage**: blobs are named by the MD5 of their bytes and
//!   written only when absent, so repeated arrays are stored once.
//!
//! - **Atomic publish**: blobs are staged in a temporary file and renamed
//!   into place, optionally gzip-compressed on the way.
//!
//! - **Graceful degradation**: unsupported kinds inside a composite become
//!   placeholder strings instead of failing the conversion.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dsindex::prelude::*;
//!
//! let mut mesh = PolyData::new(TypedArray::unnamed(
//!     3,
//!     vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
//! ));
//! mesh.polys = Some(TypedArray::unnamed(1, ArrayValues::IdType(vec![3, 0, 1, 2])));
//!
//! let converter = DatasetConverter::new(ConverterConfig::default());
//! let stats = converter.convert("triangle.vtp", &mesh.into(), "output", None)?;
//! println!("{}", stats);
//! # Ok::<(), dsindex::converter::ConvertError>(())
//! ```
//!
//! This creates a directory structure:
//! ```text
//! output/triangle.vtp/
//! ├── index.json
//! └── data/
//!     ├── <md5>.gz    # points
//!     └── <md5>.gz    # polygon connectivity
//! ```
//!
//! ## Modules
//!
//! - [`model`]: the dataset handed over by the geometry engine
//! - [`schema`]: serializable `index.json` types
//! - [`blob`]: content-addressed blob store
//! - [`serializer`]: dataset tree to index nodes
//! - [`converter`]: end-to-end conversion pipeline

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod blob;
pub mod converter;
pub mod model;
pub mod schema;
pub mod serializer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::blob::{BlobStore, CompressionType};
    pub use crate::converter::{ConversionStats, ConvertError, ConverterConfig, DatasetConverter};
    pub use crate::model::{
        Array, ArrayValues, AttributeSet, Block, DataObject, Dataset, DatasetKind, ImageData,
        MultiBlock, PolyData, RectilinearGrid, ScalarType, StringArray, Table, TypedArray,
        UnstructuredGrid,
    };
    pub use crate::schema::{ByteOrder, IndexDocument};
    pub use crate::serializer::{DatasetSerializer, UnsupportedArrayPolicy};
}
