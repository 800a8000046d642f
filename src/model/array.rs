use super::scalar::{ArrayValues, ScalarType};

/// Numeric array: `tuple_count` tuples of `components` elements each
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    /// Array name (None for anonymous arrays such as raw point coordinates)
    pub name: Option<String>,

    /// Number of components per tuple (at least 1)
    pub components: usize,

    /// Optional per-component labels, indexed by component
    pub component_names: Vec<Option<String>>,

    /// Flat element buffer in tuple-major order
    pub values: ArrayValues,
}

impl TypedArray {
    /// Create a named array
    pub fn new(name: impl Into<String>, components: usize, values: impl Into<ArrayValues>) -> Self {
        Self {
            name: Some(name.into()),
            components: components.max(1),
            component_names: Vec::new(),
            values: values.into(),
        }
    }

    /// Create an array without a name
    pub fn unnamed(components: usize, values: impl Into<ArrayValues>) -> Self {
        Self {
            name: None,
            components: components.max(1),
            component_names: Vec::new(),
            values: values.into(),
        }
    }

    /// Attach per-component labels
    pub fn with_component_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component_names = names.into_iter().map(|n| Some(n.into())).collect();
        self
    }

    /// Native element type
    pub fn scalar_type(&self) -> ScalarType {
        self.values.scalar_type()
    }

    /// Number of complete tuples in the buffer
    pub fn tuple_count(&self) -> usize {
        self.values.len() / self.components.max(1)
    }

    /// Label of component `index`, if one was provided
    pub fn component_name(&self, index: usize) -> Option<&str> {
        self.component_names.get(index).and_then(|n| n.as_deref())
    }
}

/// Textual array: an ordered sequence of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArray {
    /// Array name
    pub name: Option<String>,

    /// Number of components per tuple as reported by the source (usually 1)
    pub components: usize,

    /// All values in source order
    pub values: Vec<String>,
}

impl StringArray {
    /// Create a named single-component string array
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            components: 1,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of complete tuples
    pub fn tuple_count(&self) -> usize {
        self.values.len() / self.components.max(1)
    }
}

/// Any array that can live in an attribute bucket or a table column
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    /// Numeric array
    Numeric(TypedArray),
    /// Textual array
    Text(StringArray),
}

impl Array {
    /// Name of the wrapped array
    pub fn name(&self) -> Option<&str> {
        match self {
            Array::Numeric(a) => a.name.as_deref(),
            Array::Text(a) => a.name.as_deref(),
        }
    }
}

impl From<TypedArray> for Array {
    fn from(array: TypedArray) -> Self {
        Array::Numeric(array)
    }
}

impl From<StringArray> for Array {
    fn from(array: StringArray) -> Self {
        Array::Text(array)
    }
}

/// The three attribute buckets attached to a dataset.
///
/// Each bucket keeps the source enumeration order. Names are not required to
/// be unique here; on output a later array replaces an earlier one with the
/// same name while keeping the earlier one's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    /// Arrays defined per point
    pub point_data: Vec<Array>,

    /// Arrays defined per cell
    pub cell_data: Vec<Array>,

    /// Arrays attached to the dataset as a whole
    pub field_data: Vec<Array>,
}

impl AttributeSet {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point-data array
    pub fn with_point_array(mut self, array: impl Into<Array>) -> Self {
        self.point_data.push(array.into());
        self
    }

    /// Append a cell-data array
    pub fn with_cell_array(mut self, array: impl Into<Array>) -> Self {
        self.cell_data.push(array.into());
        self
    }

    /// Append a field-data array
    pub fn with_field_array(mut self, array: impl Into<Array>) -> Self {
        self.field_data.push(array.into());
        self
    }

    /// Total number of arrays across all buckets
    pub fn len(&self) -> usize {
        self.point_data.len() + self.cell_data.len() + self.field_data.len()
    }

    /// Returns true if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
