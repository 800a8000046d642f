use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Numeric element type of a stored blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Signed 8-bit integer
    Int8,
    /// Unsigned 8-bit integer
    Uint8,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 16-bit integer
    Uint16,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 32-bit integer
    Uint32,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
}

impl OutputKind {
    /// Typed-array name written to the `dataType` field
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Int8 => "Int8Array",
            OutputKind::Uint8 => "Uint8Array",
            OutputKind::Int16 => "Int16Array",
            OutputKind::Uint16 => "Uint16Array",
            OutputKind::Int32 => "Int32Array",
            OutputKind::Uint32 => "Uint32Array",
            OutputKind::Float32 => "Float32Array",
            OutputKind::Float64 => "Float64Array",
        }
    }

    /// Size in bytes of one stored element
    pub fn byte_size(&self) -> usize {
        match self {
            OutputKind::Int8 | OutputKind::Uint8 => 1,
            OutputKind::Int16 | OutputKind::Uint16 => 2,
            OutputKind::Int32 | OutputKind::Uint32 | OutputKind::Float32 => 4,
            OutputKind::Float64 => 8,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte order of the numeric blobs written during one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Most significant byte first
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the host running the conversion
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Reference from a descriptor to its blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobRef {
    /// Content hash; also the blob's file name (without `.gz`)
    pub id: String,
    /// Byte order of numeric elements in the blob
    pub encode: ByteOrder,
    /// Blob directory relative to the dataset directory
    pub basepath: String,
}

/// Logical kind of a stored array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrayType {
    /// Numeric array stored as raw elements
    DataArray,
    /// Textual array stored as a JSON list
    StringArray,
}

/// Element encoding of a blob as written to `dataType`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Raw numeric elements
    Numeric(OutputKind),
    /// UTF-8 JSON array of strings
    Json,
}

impl DataType {
    /// String form written to the index
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Numeric(kind) => kind.as_str(),
            DataType::Json => "JSON",
        }
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Value range of one component, or of all components when `component` is
/// the aggregate entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRange {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Component label; null for unlabeled components and the aggregate
    pub component: Option<String>,
}

/// Descriptor of one stored array, embedded wherever the array appears
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayDescriptor {
    /// Where the bytes live
    #[serde(rename = "ref")]
    pub blob: BlobRef,

    /// Numeric or textual
    #[serde(rename = "type")]
    pub array_type: ArrayType,

    /// Array name (possibly a reserved internal name)
    pub name: Option<String>,

    /// Element encoding
    #[serde(rename = "dataType")]
    pub data_type: DataType,

    /// Components per tuple
    pub tuple: usize,

    /// Components times tuples
    pub size: usize,

    /// Per-component statistics; absent for string arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<ComponentRange>>,
}

impl ArrayDescriptor {
    /// Key under which this descriptor is stored in a bucket or column map
    pub fn key(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}
