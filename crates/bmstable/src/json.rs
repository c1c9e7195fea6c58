//! Structural view over decoded JSON.
//!
//! Table sites disagree on the JSON type of the same field, so the loosely-typed
//! parts of a document are kept as [`serde_json::Value`] and classified through
//! [`JsonKind`] before any coercion happens.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// The value kinds normalization distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonKind<'a> {
    Text(&'a str),
    Integer(i64),
    Sequence(&'a [Value]),
    Object(&'a Map<String, Value>),
    /// Floats, out-of-range integers, booleans and null.
    Other(&'a Value),
}

impl<'a> From<&'a Value> for JsonKind<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => JsonKind::Text(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => JsonKind::Integer(i),
                None => JsonKind::Other(value),
            },
            Value::Array(items) => JsonKind::Sequence(items),
            Value::Object(map) => JsonKind::Object(map),
            Value::Bool(_) | Value::Null => JsonKind::Other(value),
        }
    }
}

impl JsonKind<'_> {
    pub fn is_sequence(&self) -> bool {
        matches!(self, JsonKind::Sequence(_))
    }
}

/// Lenient field deserializers shared by the raw document shapes.
pub(crate) mod de {
    use super::*;

    /// Treat an explicit `null` like a missing field.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Sequence whose `null` elements (or `null` itself) become defaults.
    pub fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(items.into_iter().map(Option::unwrap_or_default).collect())
    }

    /// Accept any JSON value and render it as a level label.
    pub fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(crate::table::coerce_level(&value))
    }
}
