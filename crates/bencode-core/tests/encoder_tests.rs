use std::collections::BTreeMap;

use bencode_core::{encode, encode_into, encode_json, integer_from_f64, BencodeError, Value};

/// Helper: build a map value from key/value pairs in the given order.
fn map(pairs: &[(&str, Value)]) -> Value {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn encode_positive_integer() {
    assert_eq!(encode(&Value::Integer(42)), "i42e");
}

#[test]
fn encode_negative_integer() {
    assert_eq!(encode(&Value::Integer(-7)), "i-7e");
}

#[test]
fn encode_zero() {
    assert_eq!(encode(&Value::Integer(0)), "i0e");
}

#[test]
fn encode_integer_extremes() {
    assert_eq!(encode(&Value::Integer(i64::MAX)), "i9223372036854775807e");
    assert_eq!(encode(&Value::Integer(i64::MIN)), "i-9223372036854775808e");
}

#[test]
fn integer_from_whole_float() {
    assert_eq!(integer_from_f64(42.0).unwrap(), 42);
    assert_eq!(integer_from_f64(-7.0).unwrap(), -7);
    assert_eq!(integer_from_f64(0.0).unwrap(), 0);
}

#[test]
fn integer_from_fractional_float_fails() {
    assert!(matches!(
        integer_from_f64(3.14),
        Err(BencodeError::NotAnInteger(_))
    ));
    assert!(integer_from_f64(0.5).is_err());
    assert!(integer_from_f64(-1e-300).is_err());
}

#[test]
fn integer_from_negative_zero_fails() {
    assert!(integer_from_f64(-0.0).is_err());
}

#[test]
fn integer_from_non_finite_fails() {
    assert!(integer_from_f64(f64::NAN).is_err());
    assert!(integer_from_f64(f64::INFINITY).is_err());
    assert!(integer_from_f64(f64::NEG_INFINITY).is_err());
}

#[test]
fn integer_from_exponent_magnitude_fails() {
    // Magnitudes this large only print in exponent notation.
    assert!(integer_from_f64(1e21).is_err());
    assert!(integer_from_f64(-1e300).is_err());
    assert!(integer_from_f64(f64::MAX).is_err());
}

#[test]
fn integer_from_float_range_edges() {
    assert_eq!(integer_from_f64(-9_223_372_036_854_775_808.0).unwrap(), i64::MIN);
    assert!(integer_from_f64(9_223_372_036_854_775_808.0).is_err());
}

#[test]
fn value_try_from_float() {
    assert_eq!(Value::try_from(12.0).unwrap(), Value::Integer(12));
    assert!(Value::try_from(12.5).is_err());
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn encode_text() {
    assert_eq!(encode(&Value::text("spam")), "4:spam");
}

#[test]
fn encode_empty_text() {
    assert_eq!(encode(&Value::text("")), "0:");
}

#[test]
fn encode_text_containing_grammar_markers() {
    assert_eq!(encode(&Value::text("i1e:l")), "5:i1e:l");
}

#[test]
fn encode_text_counts_characters_not_bytes() {
    // 4 chars, 5 bytes
    assert_eq!(encode(&Value::text("café")), "4:café");
    assert_eq!(encode(&Value::text("\u{4f60}\u{597d}")), "2:\u{4f60}\u{597d}");
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn encode_list_of_integers() {
    let list = Value::List(vec![1.into(), 2.into(), 3.into()]);
    assert_eq!(encode(&list), "li1ei2ei3ee");
}

#[test]
fn encode_empty_list() {
    assert_eq!(encode(&Value::List(vec![])), "le");
}

#[test]
fn encode_mixed_list_preserves_order() {
    let list = Value::List(vec![Value::text("spam"), Value::Integer(42)]);
    assert_eq!(encode(&list), "l4:spami42ee");
}

#[test]
fn encode_nested_lists() {
    let list = Value::List(vec![
        Value::List(vec![]),
        Value::List(vec![Value::List(vec![Value::Integer(0)])]),
    ]);
    assert_eq!(encode(&list), "lelli0eeee");
}

// ============================================================================
// Maps
// ============================================================================

#[test]
fn encode_map() {
    let value = map(&[("cow", Value::text("moo")), ("spam", Value::text("eggs"))]);
    assert_eq!(encode(&value), "d3:cow3:moo4:spam4:eggse");
}

#[test]
fn encode_empty_map() {
    assert_eq!(encode(&Value::Map(BTreeMap::new())), "de");
}

#[test]
fn encode_map_sorts_keys_regardless_of_insertion_order() {
    let ba = map(&[("b", 1.into()), ("a", 2.into())]);
    let ab = map(&[("a", 2.into()), ("b", 1.into())]);
    assert_eq!(encode(&ba), "d1:ai2e1:bi1ee");
    assert_eq!(encode(&ba), encode(&ab));
}

#[test]
fn encode_map_key_order_is_lexicographic_not_length_based() {
    let value = map(&[("ab", 1.into()), ("b", 2.into()), ("aa", 3.into())]);
    assert_eq!(encode(&value), "d2:aai3e2:abi1e1:bi2ee");
}

#[test]
fn encode_nested_map() {
    let value = map(&[("spam", Value::List(vec![Value::text("a"), Value::text("b")]))]);
    assert_eq!(encode(&value), "d4:spaml1:a1:bee");
}

#[test]
fn encode_into_appends() {
    let mut out = String::from("prefix:");
    encode_into(&Value::Integer(1), &mut out);
    encode_into(&Value::text("x"), &mut out);
    assert_eq!(out, "prefix:i1e1:x");
}

// ============================================================================
// JSON input
// ============================================================================

#[test]
fn encode_json_object() {
    let out = encode_json(r#"{"b":1,"a":2}"#).unwrap();
    assert_eq!(out, "d1:ai2e1:bi1ee");
}

#[test]
fn encode_json_nested() {
    let out = encode_json(r#"{"list":["spam",42],"name":"x"}"#).unwrap();
    assert_eq!(out, "d4:listl4:spami42ee4:name1:xe");
}

#[test]
fn encode_json_whole_float_is_integer() {
    assert_eq!(encode_json("5.0").unwrap(), "i5e");
}

#[test]
fn encode_json_rejects_fraction() {
    assert!(matches!(
        encode_json("3.14"),
        Err(BencodeError::NotAnInteger(_))
    ));
}

#[test]
fn encode_json_rejects_negative_zero() {
    assert!(encode_json("-0").is_err());
    assert!(encode_json("-0.0").is_err());
}

#[test]
fn encode_json_rejects_exponent_magnitude() {
    assert!(encode_json("1e21").is_err());
}

#[test]
fn encode_json_rejects_u64_beyond_i64() {
    assert!(encode_json("18446744073709551615").is_err());
}

#[test]
fn encode_json_rejects_null_and_booleans() {
    assert!(matches!(
        encode_json("null"),
        Err(BencodeError::UnsupportedType("null"))
    ));
    assert!(matches!(
        encode_json("true"),
        Err(BencodeError::UnsupportedType("boolean"))
    ));
}

#[test]
fn encode_json_nested_failure_rejects_whole_document() {
    assert!(encode_json(r#"[1,2,3.5]"#).is_err());
    assert!(encode_json(r#"{"ok":1,"bad":{"deep":[null]}}"#).is_err());
}

#[test]
fn encode_json_rejects_invalid_json() {
    assert!(matches!(
        encode_json("{not json"),
        Err(BencodeError::JsonParse(_))
    ));
}
