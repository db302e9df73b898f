//! # Property Bag
//!
//! The set of named values handed to a component instance at one point in
//! time. Validators borrow the bag; they never own or mutate it.
//!
//! Presence is answered by [`PropBag::is_specified`]. A key that is missing
//! and a key bound to JSON `null` are both "not specified": a component that
//! receives `null` for a prop has not been given a value for it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error converting an arbitrary JSON value into a [`PropBag`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// Only JSON objects can act as a property bag.
    #[error("property bag must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the rejected value.
        found: &'static str,
    },
}

/// Mapping from prop name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropBag(Map<String, Value>);

impl PropBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a prop, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up a specified prop. Returns `None` for missing keys and for
    /// keys bound to `null`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    /// The presence query: true if `name` is bound to a non-null value.
    pub fn is_specified(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True if any of `names` is specified.
    pub fn any_specified<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().any(|n| self.is_specified(n.as_ref()))
    }

    /// Number of keys, including keys bound to `null`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the bag has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all entries, including `null` bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Access the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the bag and return the underlying JSON map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for PropBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for PropBag {
    type Error = BagError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BagError::NotAnObject {
                found: value_type_name(&other),
            }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PropBag {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// JSON type name of a value, as used in type-mismatch messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
