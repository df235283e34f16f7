//! # bencode-core
//!
//! Pure-Rust encoder and decoder for **bencode**, the length-prefixed,
//! self-delimiting encoding used by peer-to-peer protocols such as BitTorrent.
//!
//! | Production | Format | Example |
//! |------------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Text | `<length>:<chars>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:cow3:mooe` → {"cow": "moo"} |
//!
//! ## Quick start
//!
//! ```rust
//! use bencode_core::{decode, encode, Value};
//!
//! let value = decode("d4:spaml1:a1:bee").unwrap();
//! assert_eq!(
//!     value.get("spam"),
//!     Some(&Value::List(vec![Value::text("a"), Value::text("b")]))
//! );
//!
//! // Re-encoding reproduces the canonical bytes.
//! assert_eq!(encode(&value), "d4:spaml1:a1:bee");
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — `Value` → bencode, plus JSON → bencode
//! - [`decoder`] — bencode → `Value`, with a reusable [`Decoder`] cursor
//! - [`value`] — the closed `Value` model and its conversions
//! - [`config`] — lenient/strict decoding and nesting limits
//! - [`error`] — error types for encode/decode failures

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
mod number;
mod token;
pub mod value;

pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH};
pub use decoder::{decode, decode_json, decode_prefix, decode_with, Decoder};
pub use encoder::{encode, encode_into, encode_json};
pub use error::{BencodeError, Result};
pub use number::integer_from_f64;
pub use value::Value;
