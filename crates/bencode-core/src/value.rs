//! The bencode value model.
//!
//! A closed union of the four bencode productions. Anything that is not one of
//! these (booleans, null, fractional numbers) is rejected when converting into
//! a `Value`, so encoding a `Value` never fails.

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

use crate::error::{BencodeError, Result};
use crate::number::{integer_from_f64, integer_from_json};

/// A bencode value.
///
/// # Examples
///
/// ```
/// use bencode_core::Value;
/// use std::collections::BTreeMap;
///
/// let int: Value = 42i64.into();
/// let text: Value = "spam".into();
/// let list = Value::List(vec![int.clone(), text.clone()]);
///
/// let mut map = BTreeMap::new();
/// map.insert("list".to_string(), list);
/// let dict = Value::Map(map);
///
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(text.as_str(), Some("spam"));
/// assert_eq!(dict.get("list").and_then(Value::as_list).map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A character string. Its encoded length counts `char`s, not bytes.
    Text(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with text keys, always iterated in ascending key order.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Creates a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Consumes the value and returns the map, if it is one.
    pub fn into_map(self) -> Option<BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a map.
    ///
    /// Returns `None` if the value is not a map or if the key is not present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }

    /// Name of the production this value encodes as.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(m: BTreeMap<String, Value>) -> Self {
        Value::Map(m)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

impl TryFrom<f64> for Value {
    type Error = BencodeError;

    fn try_from(n: f64) -> Result<Self> {
        integer_from_f64(n).map(Value::Integer)
    }
}

/// Converts a JSON document into the bencode value model.
///
/// Objects become maps (re-sorted by key), arrays become lists, strings become
/// text and integral numbers become integers. `null`, booleans and numbers that
/// fail [`integer_from_f64`] are rejected, and one rejected element rejects the
/// whole document.
impl TryFrom<serde_json::Value> for Value {
    type Error = BencodeError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Err(BencodeError::UnsupportedType("null")),
            serde_json::Value::Bool(_) => Err(BencodeError::UnsupportedType("boolean")),
            serde_json::Value::Number(n) => integer_from_json(&n).map(Value::Integer),
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Array(arr) => arr
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            serde_json::Value::Object(obj) => obj
                .into_iter()
                .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Value::Map),
        }
    }
}

// Maps serialize in ascending key order, so JSON output is canonical too.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(l) => serializer.collect_seq(l),
            Value::Map(m) => serializer.collect_map(m),
        }
    }
}
