//! Numeric validity checks at the boundary into the integer production.
//!
//! Bencode integers are whole decimal numbers with no exponent and no signed
//! zero. Numbers arriving as `f64` (or as JSON numbers) are checked here with
//! direct predicates before they become a [`Value::Integer`](crate::Value).

use crate::error::{BencodeError, Result};

/// 2^63 as an exact `f64`; the first magnitude past `i64::MAX`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert an `f64` to a bencode integer.
///
/// Rejects NaN, ±infinity, any fractional part, `-0.0`, and whole numbers
/// outside the `i64` range (which includes every magnitude that would need
/// exponent notation to print).
///
/// ```
/// use bencode_core::integer_from_f64;
///
/// assert_eq!(integer_from_f64(42.0).unwrap(), 42);
/// assert!(integer_from_f64(3.14).is_err());
/// assert!(integer_from_f64(-0.0).is_err());
/// assert!(integer_from_f64(f64::NAN).is_err());
/// ```
pub fn integer_from_f64(n: f64) -> Result<i64> {
    if !n.is_finite() {
        return Err(BencodeError::NotAnInteger(format!("{n} is not finite")));
    }
    if n.fract() != 0.0 {
        return Err(BencodeError::NotAnInteger(format!("{n} has a fractional part")));
    }
    if n == 0.0 && n.is_sign_negative() {
        return Err(BencodeError::NotAnInteger("negative zero".to_string()));
    }
    if !(-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&n) {
        return Err(BencodeError::NotAnInteger(format!("{n} is out of range")));
    }
    Ok(n as i64)
}

/// Convert a JSON number to a bencode integer.
pub(crate) fn integer_from_json(n: &serde_json::Number) -> Result<i64> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if let Some(u) = n.as_u64() {
        return Err(BencodeError::NotAnInteger(format!("{u} is out of range")));
    }
    match n.as_f64() {
        Some(f) => integer_from_f64(f),
        None => Err(BencodeError::NotAnInteger(n.to_string())),
    }
}
