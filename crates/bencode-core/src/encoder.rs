//! Bencode encoder — converts a [`Value`] tree into its canonical encoding.
//!
//! - Integers: `i<decimal>e`, no leading zeros, `-` only for negatives
//! - Text: `<char count>:<text>`
//! - Lists: `l<items>e`, items in order
//! - Maps: `d<key><value>...e`, keys in ascending order
//!
//! A `Value` only holds representable data, so encoding it is infallible.
//! [`encode_json`] is the fallible entry point for JSON documents, which can
//! carry booleans, null and fractional numbers.
//!
//! # Example
//! ```
//! use bencode_core::{encode, Value};
//!
//! let list = Value::List(vec![Value::Integer(1), Value::text("two")]);
//! assert_eq!(encode(&list), "li1e3:twoe");
//! ```

use std::fmt::Write;

use crate::error::Result;
use crate::token::{DICT_START, END, INTEGER_START, LIST_START, TEXT_SEPARATOR};
use crate::value::Value;

/// Encode a value into its canonical bencode form.
///
/// ```
/// use bencode_core::{encode, Value};
///
/// let map: Value = [
///     ("b".to_string(), Value::Integer(1)),
///     ("a".to_string(), Value::Integer(2)),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(encode(&map), "d1:ai2e1:bi1ee");
/// ```
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    encode_into(value, &mut out);
    out
}

/// Append the canonical encoding of `value` to `out`.
pub fn encode_into(value: &Value, out: &mut String) {
    match value {
        Value::Integer(i) => encode_integer(*i, out),
        Value::Text(s) => encode_text(s, out),
        Value::List(items) => {
            out.push(LIST_START);
            for item in items {
                encode_into(item, out);
            }
            out.push(END);
        }
        Value::Map(map) => {
            out.push(DICT_START);
            // BTreeMap iterates in ascending key order.
            for (key, val) in map {
                encode_text(key, out);
                encode_into(val, out);
            }
            out.push(END);
        }
    }
}

/// Encode a JSON string into bencode.
///
/// Parses the input as JSON, converts it into the bencode value model and
/// encodes it. Fails if the input is not valid JSON or contains anything the
/// model cannot hold (`null`, booleans, non-integral numbers, `-0`).
///
/// ```
/// use bencode_core::encode_json;
///
/// assert_eq!(encode_json(r#"{"spam":["a","b"]}"#).unwrap(), "d4:spaml1:a1:bee");
/// assert!(encode_json("3.14").is_err());
/// assert!(encode_json("true").is_err());
/// ```
pub fn encode_json(json: &str) -> Result<String> {
    let json: serde_json::Value = serde_json::from_str(json)?;
    let value = Value::try_from(json).inspect_err(|e| {
        tracing::debug!(error = %e, "JSON document not representable as bencode");
    })?;
    Ok(encode(&value))
}

fn encode_integer(i: i64, out: &mut String) {
    out.push(INTEGER_START);
    // Writing to a String cannot fail.
    let _ = write!(out, "{i}");
    out.push(END);
}

fn encode_text(s: &str, out: &mut String) {
    let _ = write!(out, "{}", s.chars().count());
    out.push(TEXT_SEPARATOR);
    out.push_str(s);
}
