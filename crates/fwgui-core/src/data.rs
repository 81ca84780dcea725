//! Data context used to expand data-bound widgets.
//!
//! Lists repeat their item template once per element of the bound array and
//! selects pick a child by the bound enum value. The real evaluator lives
//! outside the packer; [`StaticData`] serves values recorded in the project.

use indexmap::IndexMap;
use serde_json::Value;

/// Read-only view of the values bound to data names.
pub trait DataContext {
    /// Length of the array bound to `name`, if it is an array.
    fn array_len(&self, name: &str) -> Option<usize>;

    /// Enum value bound to `name`, if it is numeric.
    fn enum_value(&self, name: &str) -> Option<i64>;
}

impl<T: DataContext + ?Sized> DataContext for &T {
    fn array_len(&self, name: &str) -> Option<usize> {
        (*self).array_len(name)
    }

    fn enum_value(&self, name: &str) -> Option<i64> {
        (*self).enum_value(name)
    }
}

/// Values stored in the project file under `"data"`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct StaticData(IndexMap<String, Value>);

impl StaticData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl FromIterator<(String, Value)> for StaticData {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl DataContext for StaticData {
    fn array_len(&self, name: &str) -> Option<usize> {
        self.0.get(name)?.as_array().map(Vec::len)
    }

    fn enum_value(&self, name: &str) -> Option<i64> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }
}
