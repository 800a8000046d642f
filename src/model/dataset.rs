use std::fmt;

use super::array::{Array, AttributeSet, TypedArray};

/// The six dataset kinds the serializer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Surface mesh with vertex/line/polygon/strip topology
    PolyData,
    /// Arbitrary cells with explicit connectivity and type codes
    UnstructuredGrid,
    /// Regular grid defined by origin, spacing and dimensions
    ImageData,
    /// Axis-aligned grid with explicit per-axis coordinates
    RectilinearGrid,
    /// Column-oriented table
    Table,
    /// Composite of named child datasets
    MultiBlock,
}

impl DatasetKind {
    /// Kind name as written to the `type` field of the index
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::PolyData => "PolyData",
            DatasetKind::UnstructuredGrid => "UnstructuredGrid",
            DatasetKind::ImageData => "ImageData",
            DatasetKind::RectilinearGrid => "RectilinearGrid",
            DatasetKind::Table => "Table",
            DatasetKind::MultiBlock => "MultiBlock",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Surface mesh
#[derive(Debug, Clone, PartialEq)]
pub struct PolyData {
    /// Point coordinates (usually 3 components)
    pub points: TypedArray,
    /// Vertex connectivity, if the mesh defines vertices
    pub verts: Option<TypedArray>,
    /// Line connectivity, if the mesh defines lines
    pub lines: Option<TypedArray>,
    /// Polygon connectivity, if the mesh defines polygons
    pub polys: Option<TypedArray>,
    /// Triangle-strip connectivity, if the mesh defines strips
    pub strips: Option<TypedArray>,
    /// Point/cell/field attributes
    pub attributes: AttributeSet,
}

impl PolyData {
    /// Create a mesh with points only
    pub fn new(points: TypedArray) -> Self {
        Self {
            points,
            verts: None,
            lines: None,
            polys: None,
            strips: None,
            attributes: AttributeSet::default(),
        }
    }
}

/// Unstructured grid
#[derive(Debug, Clone, PartialEq)]
pub struct UnstructuredGrid {
    /// Point coordinates
    pub points: TypedArray,
    /// Cell connectivity
    pub cells: TypedArray,
    /// One type code per cell
    pub cell_types: TypedArray,
    /// Point/cell/field attributes
    pub attributes: AttributeSet,
}

/// Uniform grid; its geometry is fully described by three 3-tuples
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// World position of the first point
    pub origin: [f64; 3],
    /// Distance between points along each axis
    pub spacing: [f64; 3],
    /// Number of points along each axis
    pub dimensions: [i64; 3],
    /// Point/cell/field attributes
    pub attributes: AttributeSet,
}

/// Axis-aligned grid with independent coordinate arrays
#[derive(Debug, Clone, PartialEq)]
pub struct RectilinearGrid {
    /// Number of points along each axis
    pub dimensions: [i64; 3],
    /// X coordinates (1 component)
    pub x_coordinates: TypedArray,
    /// Y coordinates (1 component)
    pub y_coordinates: TypedArray,
    /// Z coordinates (1 component)
    pub z_coordinates: TypedArray,
    /// Point/cell/field attributes
    pub attributes: AttributeSet,
}

/// Column-oriented table; it has no attribute buckets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Columns in source order
    pub columns: Vec<Array>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column
    pub fn with_column(mut self, column: impl Into<Array>) -> Self {
        self.columns.push(column.into());
        self
    }
}

/// One named child of a [`MultiBlock`]
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block name from the composite's metadata
    pub name: String,
    /// The child dataset; None when the slot is empty
    pub data: Option<DataObject>,
}

impl Block {
    /// Create a block holding a data object
    pub fn new(name: impl Into<String>, data: impl Into<DataObject>) -> Self {
        Self {
            name: name.into(),
            data: Some(data.into()),
        }
    }

    /// Create a block slot with no dataset
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: None,
        }
    }
}

/// Composite dataset whose children are themselves data objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiBlock {
    /// Children in source order
    pub blocks: Vec<Block>,
}

impl MultiBlock {
    /// Create an empty composite
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// A dataset of one of the supported kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// Surface mesh
    PolyData(PolyData),
    /// Unstructured grid
    UnstructuredGrid(UnstructuredGrid),
    /// Uniform grid
    ImageData(ImageData),
    /// Rectilinear grid
    RectilinearGrid(RectilinearGrid),
    /// Table
    Table(Table),
    /// Composite
    MultiBlock(MultiBlock),
}

impl Dataset {
    /// Kind of this dataset
    pub fn kind(&self) -> DatasetKind {
        match self {
            Dataset::PolyData(_) => DatasetKind::PolyData,
            Dataset::UnstructuredGrid(_) => DatasetKind::UnstructuredGrid,
            Dataset::ImageData(_) => DatasetKind::ImageData,
            Dataset::RectilinearGrid(_) => DatasetKind::RectilinearGrid,
            Dataset::Table(_) => DatasetKind::Table,
            Dataset::MultiBlock(_) => DatasetKind::MultiBlock,
        }
    }
}

/// Whatever the geometry engine produced: a supported dataset, or the kind
/// name of something this crate cannot serialize
#[derive(Debug, Clone, PartialEq)]
pub enum DataObject {
    /// A dataset of a supported kind
    Dataset(Dataset),
    /// A dataset of an unsupported kind, identified by its kind name
    Unsupported(String),
}

impl DataObject {
    /// Kind name as reported to users and written into placeholders
    pub fn kind_name(&self) -> &str {
        match self {
            DataObject::Dataset(dataset) => dataset.kind().name(),
            DataObject::Unsupported(kind) => kind,
        }
    }
}

macro_rules! impl_into_dataset {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Dataset {
                fn from(dataset: $variant) -> Self {
                    Dataset::$variant(dataset)
                }
            }

            impl From<$variant> for DataObject {
                fn from(dataset: $variant) -> Self {
                    DataObject::Dataset(Dataset::$variant(dataset))
                }
            }
        )*
    };
}

impl_into_dataset!(
    PolyData,
    UnstructuredGrid,
    ImageData,
    RectilinearGrid,
    Table,
    MultiBlock,
);

impl From<Dataset> for DataObject {
    fn from(dataset: Dataset) -> Self {
        DataObject::Dataset(dataset)
    }
}

