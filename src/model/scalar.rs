use std::fmt;

/// Native element type of a numeric array, as reported by the geometry engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Packed bit array (one element per byte in [`ArrayValues::Bit`])
    Bit,
    /// Signed 8-bit integer
    Int8,
    /// Unsigned 8-bit integer
    UInt8,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 16-bit integer
    UInt16,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 32-bit integer
    UInt32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 64-bit integer
    UInt64,
    /// 32-bit IEEE float
    Float32,
    /// 64-bit IEEE float
    Float64,
    /// 64-bit signed index type used for connectivity and ids
    IdType,
}

impl ScalarType {
    /// Name of the native type, used in log and error messages
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Bit => "bit",
            ScalarType::Int8 => "int8",
            ScalarType::UInt8 => "uint8",
            ScalarType::Int16 => "int16",
            ScalarType::UInt16 => "uint16",
            ScalarType::Int32 => "int32",
            ScalarType::UInt32 => "uint32",
            ScalarType::Int64 => "int64",
            ScalarType::UInt64 => "uint64",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
            ScalarType::IdType => "idtype",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat element buffer of a numeric array, tagged by its native type.
///
/// Elements are stored tuple-major: component `i` of tuple `t` lives at
/// index `t * components + i`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValues {
    /// Bit values, one element per byte (0 or 1)
    Bit(Vec<u8>),
    /// Signed 8-bit values
    Int8(Vec<i8>),
    /// Unsigned 8-bit values
    UInt8(Vec<u8>),
    /// Signed 16-bit values
    Int16(Vec<i16>),
    /// Unsigned 16-bit values
    UInt16(Vec<u16>),
    /// Signed 32-bit values
    Int32(Vec<i32>),
    /// Unsigned 32-bit values
    UInt32(Vec<u32>),
    /// Signed 64-bit values
    Int64(Vec<i64>),
    /// Unsigned 64-bit values
    UInt64(Vec<u64>),
    /// 32-bit floats
    Float32(Vec<f32>),
    /// 64-bit floats
    Float64(Vec<f64>),
    /// 64-bit index values (narrowed to unsigned 32-bit on output)
    IdType(Vec<i64>),
}

impl ArrayValues {
    /// Native element type of this buffer
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ArrayValues::Bit(_) => ScalarType::Bit,
            ArrayValues::Int8(_) => ScalarType::Int8,
            ArrayValues::UInt8(_) => ScalarType::UInt8,
            ArrayValues::Int16(_) => ScalarType::Int16,
            ArrayValues::UInt16(_) => ScalarType::UInt16,
            ArrayValues::Int32(_) => ScalarType::Int32,
            ArrayValues::UInt32(_) => ScalarType::UInt32,
            ArrayValues::Int64(_) => ScalarType::Int64,
            ArrayValues::UInt64(_) => ScalarType::UInt64,
            ArrayValues::Float32(_) => ScalarType::Float32,
            ArrayValues::Float64(_) => ScalarType::Float64,
            ArrayValues::IdType(_) => ScalarType::IdType,
        }
    }

    /// Total number of elements (tuples times components)
    pub fn len(&self) -> usize {
        match self {
            ArrayValues::Bit(v) | ArrayValues::UInt8(v) => v.len(),
            ArrayValues::Int8(v) => v.len(),
            ArrayValues::Int16(v) => v.len(),
            ArrayValues::UInt16(v) => v.len(),
            ArrayValues::Int32(v) => v.len(),
            ArrayValues::UInt32(v) => v.len(),
            ArrayValues::Int64(v) | ArrayValues::IdType(v) => v.len(),
            ArrayValues::UInt64(v) => v.len(),
            ArrayValues::Float32(v) => v.len(),
            ArrayValues::Float64(v) => v.len(),
        }
    }

    /// Returns true if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `index` widened to `f64`, or `None` when out of bounds
    #[inline]
    pub fn value_f64(&self, index: usize) -> Option<f64> {
        match self {
            ArrayValues::Bit(v) | ArrayValues::UInt8(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::Int8(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::Int16(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::UInt16(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::Int32(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::UInt32(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::Int64(v) | ArrayValues::IdType(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::UInt64(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::Float32(v) => v.get(index).map(|&x| x as f64),
            ArrayValues::Float64(v) => v.get(index).copied(),
        }
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ArrayValues {
                fn from(values: Vec<$ty>) -> Self {
                    ArrayValues::$variant(values)
                }
            }
        )*
    };
}

// `Vec<i64>` maps to Int64; index arrays are built with `ArrayValues::IdType`.
impl_from_vec! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
}
