use crate::model::{Array, AttributeSet};
use crate::schema::{ArrayMap, AttributeNodes};

use super::{DatasetSerializer, SerializeError};

impl DatasetSerializer<'_> {
    /// Serialize the three attribute buckets of a dataset.
    ///
    /// Buckets are independent; an empty bucket yields an empty map.
    pub fn serialize_attributes(
        &mut self,
        attributes: &AttributeSet,
    ) -> Result<AttributeNodes, SerializeError> {
        Ok(AttributeNodes {
            point_data: self.serialize_arrays(&attributes.point_data)?,
            cell_data: self.serialize_arrays(&attributes.cell_data)?,
            field_data: self.serialize_arrays(&attributes.field_data)?,
        })
    }

    /// Serialize arrays into a name-keyed map in source order; a later array
    /// with a duplicate name replaces the earlier one in place
    pub(super) fn serialize_arrays(
        &mut self,
        arrays: &[Array],
    ) -> Result<ArrayMap, SerializeError> {
        let mut map = ArrayMap::with_capacity(arrays.len());
        for array in arrays {
            if let Some(descriptor) = self.serialize_array(array)? {
                map.insert(descriptor.key(), descriptor);
            }
        }
        Ok(map)
    }
}
