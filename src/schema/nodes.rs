use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::descriptor::ArrayDescriptor;
use crate::model::DatasetKind;

/// Name-keyed arrays in source order.
///
/// Inserting an existing key replaces the value in place, so a later array
/// with a duplicate name wins but keeps the first one's position.
pub type ArrayMap = IndexMap<String, ArrayDescriptor>;

/// The three attribute buckets of a dataset node; empty buckets serialize as
/// `{}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeNodes {
    /// Point attributes
    pub point_data: ArrayMap,
    /// Cell attributes
    pub cell_data: ArrayMap,
    /// Field attributes
    pub field_data: ArrayMap,
}

/// PolyData topology; only the topologies the mesh defines are present
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CellsNode {
    /// Vertex connectivity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verts: Option<ArrayDescriptor>,
    /// Line connectivity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<ArrayDescriptor>,
    /// Polygon connectivity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polys: Option<ArrayDescriptor>,
    /// Triangle-strip connectivity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strips: Option<ArrayDescriptor>,
}

/// Payload of a PolyData node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolyDataNode {
    /// Point coordinates
    pub points: ArrayDescriptor,
    /// Topology
    pub cells: CellsNode,
    /// Attribute buckets
    #[serde(flatten)]
    pub attributes: AttributeNodes,
}

/// Payload of an UnstructuredGrid node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnstructuredGridNode {
    /// Point coordinates
    pub points: ArrayDescriptor,
    /// Cell connectivity
    pub cells: ArrayDescriptor,
    /// Per-cell type codes
    pub cell_types: ArrayDescriptor,
    /// Attribute buckets
    #[serde(flatten)]
    pub attributes: AttributeNodes,
}

/// Payload of an ImageData node; geometry is inlined, never stored as blobs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageDataNode {
    /// Origin
    pub origin: [f64; 3],
    /// Spacing
    pub spacing: [f64; 3],
    /// Point dimensions
    pub dimensions: [i64; 3],
    /// Attribute buckets
    #[serde(flatten)]
    pub attributes: AttributeNodes,
}

/// Payload of a RectilinearGrid node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RectilinearGridNode {
    /// Point dimensions
    pub dimensions: [i64; 3],
    /// X coordinates
    pub x_coordinates: ArrayDescriptor,
    /// Y coordinates
    pub y_coordinates: ArrayDescriptor,
    /// Z coordinates
    pub z_coordinates: ArrayDescriptor,
    /// Attribute buckets
    #[serde(flatten)]
    pub attributes: AttributeNodes,
}

/// Payload of a Table node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableNode {
    /// Columns keyed by name
    pub columns: ArrayMap,
}

/// Value of one entry in a MultiBlock's `Blocks` map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockEntry {
    /// Structured node of a supported child
    Dataset(DatasetNode),
    /// Kind name of a child that could not be serialized
    Unsupported(String),
}

/// Payload of a MultiBlock node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiBlockNode {
    /// Children keyed by block name
    pub blocks: IndexMap<String, BlockEntry>,
}

/// A serialized dataset.
///
/// Serializes as `{"type": <kind>, <kind>: <payload>}`, so it can be
/// flattened into the index document or nested as a block.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetNode {
    /// PolyData payload
    PolyData(PolyDataNode),
    /// UnstructuredGrid payload
    UnstructuredGrid(UnstructuredGridNode),
    /// ImageData payload
    ImageData(ImageDataNode),
    /// RectilinearGrid payload
    RectilinearGrid(RectilinearGridNode),
    /// Table payload
    Table(TableNode),
    /// MultiBlock payload
    MultiBlock(MultiBlockNode),
}

impl DatasetNode {
    /// Kind of the serialized dataset
    pub fn kind(&self) -> DatasetKind {
        match self {
            DatasetNode::PolyData(_) => DatasetKind::PolyData,
            DatasetNode::UnstructuredGrid(_) => DatasetKind::UnstructuredGrid,
            DatasetNode::ImageData(_) => DatasetKind::ImageData,
            DatasetNode::RectilinearGrid(_) => DatasetKind::RectilinearGrid,
            DatasetNode::Table(_) => DatasetKind::Table,
            DatasetNode::MultiBlock(_) => DatasetKind::MultiBlock,
        }
    }
}

impl Serialize for DatasetNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind().name();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", kind)?;
        match self {
            DatasetNode::PolyData(node) => map.serialize_entry(kind, node)?,
            DatasetNode::UnstructuredGrid(node) => map.serialize_entry(kind, node)?,
            DatasetNode::ImageData(node) => map.serialize_entry(kind, node)?,
            DatasetNode::RectilinearGrid(node) => map.serialize_entry(kind, node)?,
            DatasetNode::Table(node) => map.serialize_entry(kind, node)?,
            DatasetNode::MultiBlock(node) => map.serialize_entry(kind, node)?,
        }
        map.end()
    }
}

/// `metadata` section of the index document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexMetadata {
    /// Dataset directory name
    pub name: String,
}

/// The complete `index.json` document.
///
/// `dataset` is None when the root kind is unsupported; the document then
/// carries only metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexDocument {
    /// Dataset metadata
    pub metadata: IndexMetadata,
    /// Kind tag and payload of the root dataset
    #[serde(flatten)]
    pub dataset: Option<DatasetNode>,
}

impl IndexDocument {
    /// Create a metadata-only document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: IndexMetadata { name: name.into() },
            dataset: None,
        }
    }
}
