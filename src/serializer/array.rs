use byteorder::{BigEndian, LittleEndian};
use log::warn;

use crate::model::{Array, ArrayValues, ScalarType, StringArray, TypedArray};
use crate::schema::{ArrayDescriptor, ArrayType, ByteOrder, ComponentRange, DataType, OutputKind};

use super::{DatasetSerializer, SerializeError, UnsupportedArrayPolicy};

/// Output typed-array kind for a native element type.
///
/// Returns `None` for types that cannot be stored. `UInt16` maps to the
/// signed `Int16` kind, which downstream readers rely on.
pub fn output_kind(scalar_type: ScalarType) -> Option<OutputKind> {
    match scalar_type {
        ScalarType::Int8 => Some(OutputKind::Int8),
        ScalarType::UInt8 => Some(OutputKind::Uint8),
        ScalarType::Int16 => Some(OutputKind::Int16),
        ScalarType::UInt16 => Some(OutputKind::Int16),
        ScalarType::Int32 => Some(OutputKind::Int32),
        ScalarType::UInt32 => Some(OutputKind::Uint32),
        ScalarType::Float32 => Some(OutputKind::Float32),
        ScalarType::Float64 => Some(OutputKind::Float64),
        ScalarType::IdType => Some(OutputKind::Uint32),
        ScalarType::Bit | ScalarType::Int64 | ScalarType::UInt64 => None,
    }
}

/// Narrow index values to unsigned 32-bit. Negative values become
/// `u32::MAX`; values above `u32::MAX` are truncated.
pub fn narrow_ids(ids: &[i64]) -> Vec<u32> {
    ids.iter()
        .map(|&id| if id < 0 { u32::MAX } else { id as u32 })
        .collect()
}

/// Encode the elements in `byte_order`, narrowing index arrays.
///
/// Returns `None` for element types [`output_kind`] rejects.
pub fn encode_values(values: &ArrayValues, byte_order: ByteOrder) -> Option<Vec<u8>> {
    match byte_order {
        ByteOrder::LittleEndian => encode_with::<LittleEndian>(values),
        ByteOrder::BigEndian => encode_with::<BigEndian>(values),
    }
}

fn encode_with<E: byteorder::ByteOrder>(values: &ArrayValues) -> Option<Vec<u8>> {
    let bytes: Vec<u8> = match values {
        ArrayValues::Int8(v) => v.iter().map(|&x| x as u8).collect(),
        ArrayValues::UInt8(v) => v.clone(),
        ArrayValues::Int16(v) => encode_slice(v, 2, E::write_i16_into),
        ArrayValues::UInt16(v) => encode_slice(v, 2, E::write_u16_into),
        ArrayValues::Int32(v) => encode_slice(v, 4, E::write_i32_into),
        ArrayValues::UInt32(v) => encode_slice(v, 4, E::write_u32_into),
        ArrayValues::Float32(v) => encode_slice(v, 4, E::write_f32_into),
        ArrayValues::Float64(v) => encode_slice(v, 8, E::write_f64_into),
        ArrayValues::IdType(v) => encode_slice(&narrow_ids(v), 4, E::write_u32_into),
        ArrayValues::Bit(_) | ArrayValues::Int64(_) | ArrayValues::UInt64(_) => return None,
    };
    Some(bytes)
}

#[inline]
fn encode_slice<T>(src: &[T], width: usize, write: fn(&[T], &mut [u8])) -> Vec<u8> {
    let mut buf = vec![0u8; src.len() * width];
    write(src, &mut buf);
    buf
}

/// Per-component value ranges of a numeric array.
///
/// Single-component arrays get one entry. Multi-component arrays get one
/// entry per component followed by an aggregate entry over all values with
/// `component: null`. Non-finite values (NaN and infinities) are ignored; a
/// component without finite values reports `0..0`.
pub fn component_ranges(array: &TypedArray) -> Vec<ComponentRange> {
    let components = array.components.max(1);
    let tuples = array.tuple_count();
    let values = &array.values;

    let component_range = |component: usize| {
        let (min, max) = value_range(
            (0..tuples).filter_map(|t| values.value_f64(t * components + component)),
        );
        ComponentRange {
            min,
            max,
            component: array.component_name(component).map(str::to_string),
        }
    };

    if components == 1 {
        return vec![component_range(0)];
    }

    let mut ranges: Vec<ComponentRange> = (0..components).map(component_range).collect();
    let (min, max) = value_range((0..tuples * components).filter_map(|i| values.value_f64(i)));
    ranges.push(ComponentRange {
        min,
        max,
        component: None,
    });
    ranges
}

fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}

fn display_name(name: Option<&str>) -> String {
    name.unwrap_or("<unnamed>").to_string()
}

impl DatasetSerializer<'_> {
    /// Store a numeric array and describe it.
    ///
    /// `name` overrides the array's own name in the descriptor (used for the
    /// reserved `_points`-style names).
    pub fn serialize_data_array(
        &mut self,
        array: &TypedArray,
        name: Option<&str>,
    ) -> Result<ArrayDescriptor, SerializeError> {
        let name = name.or(array.name.as_deref());
        let components = array.components.max(1);

        if array.values.len() % components != 0 {
            return Err(SerializeError::MalformedArray {
                array: display_name(name),
                len: array.values.len(),
                components,
            });
        }

        let unsupported = || SerializeError::UnsupportedScalarType {
            scalar_type: array.scalar_type(),
            array: display_name(name),
        };
        let kind = output_kind(array.scalar_type()).ok_or_else(unsupported)?;
        let bytes = encode_values(&array.values, self.store.byte_order()).ok_or_else(unsupported)?;

        let blob = self.store.write(&bytes)?;
        self.stats.arrays_serialized += 1;

        Ok(ArrayDescriptor {
            blob,
            array_type: ArrayType::DataArray,
            name: name.map(str::to_string),
            data_type: DataType::Numeric(kind),
            tuple: components,
            size: components * array.tuple_count(),
            ranges: Some(component_ranges(array)),
        })
    }

    /// Store a string array as a JSON list and describe it
    pub fn serialize_string_array(
        &mut self,
        array: &StringArray,
    ) -> Result<ArrayDescriptor, SerializeError> {
        let components = array.components.max(1);
        let json = serde_json::to_vec(&array.values)?;

        let blob = self.store.write(&json)?;
        self.stats.arrays_serialized += 1;

        Ok(ArrayDescriptor {
            blob,
            array_type: ArrayType::StringArray,
            name: array.name.clone(),
            data_type: DataType::Json,
            tuple: components,
            size: components * array.tuple_count(),
            ranges: None,
        })
    }

    /// Serialize a bucket or column array.
    ///
    /// Returns `Ok(None)` when the array was skipped under
    /// [`UnsupportedArrayPolicy::Skip`].
    pub fn serialize_array(
        &mut self,
        array: &Array,
    ) -> Result<Option<ArrayDescriptor>, SerializeError> {
        let result = match array {
            Array::Numeric(numeric) => self.serialize_data_array(numeric, None),
            Array::Text(text) => self.serialize_string_array(text),
        };

        match result {
            Ok(descriptor) => Ok(Some(descriptor)),
            Err(err @ SerializeError::UnsupportedScalarType { .. })
                if self.policy == UnsupportedArrayPolicy::Skip =>
            {
                warn!("Skipping array: {}", err);
                self.stats.arrays_skipped += 1;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
