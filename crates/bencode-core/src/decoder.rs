//! Bencode decoder — converts bencode text back into a [`Value`] tree.
//!
//! The first unconsumed character selects the production (`i`, a digit, `l`
//! or `d`); lists and dictionaries recurse for their elements. All recursive
//! steps of one top-level call share a single [`Decoder`], whose cursor moves
//! forward as each token is consumed, so sibling values pick up exactly where
//! the previous one ended.
//!
//! # Key design decisions
//!
//! - **Character oriented**: text lengths count `char`s. The cursor is a byte
//!   offset that only ever lands on `char` boundaries.
//! - **Lenient by default**: `i007e` and `i-0e` decode, dictionary keys may
//!   arrive in any order (the result is re-sorted and the last duplicate wins)
//!   and input after the first complete value is ignored. Canonical form is
//!   enforced on encode, and on decode only under [`DecoderConfig::strict`].
//! - **Bounded recursion**: nesting deeper than `max_depth` is rejected before
//!   it can exhaust the stack.

use std::collections::BTreeMap;

use crate::config::DecoderConfig;
use crate::error::{BencodeError, Result};
use crate::token::{
    classify, Production, DICT_START, END, INTEGER_START, LIST_START, MINUS, TEXT_SEPARATOR,
};
use crate::value::Value;

/// Decode the first bencode value in `input` with the default (lenient)
/// configuration.
///
/// ```
/// use bencode_core::{decode, Value};
///
/// let value = decode("l4:spam4:eggse").unwrap();
/// assert_eq!(value, Value::List(vec![Value::text("spam"), Value::text("eggs")]));
///
/// assert!(decode("5:spam").is_err());
/// ```
pub fn decode(input: &str) -> Result<Value> {
    decode_with(input, &DecoderConfig::default())
}

/// Decode the first bencode value in `input` using `config`.
pub fn decode_with(input: &str, config: &DecoderConfig) -> Result<Value> {
    let mut decoder = Decoder::with_config(input, *config);
    let result = decoder
        .decode_value()
        .and_then(|value| decoder.finish().map(|_| value));
    if let Err(e) = &result {
        tracing::debug!(error = %e, strict = config.strict, "bencode decode failed");
    }
    result
}

/// Decode one value from the front of `input` and return it together with the
/// unconsumed remainder.
///
/// ```
/// use bencode_core::{decode_prefix, Value};
///
/// let (value, rest) = decode_prefix("i42e4:spam").unwrap();
/// assert_eq!(value, Value::Integer(42));
/// assert_eq!(rest, "4:spam");
/// ```
pub fn decode_prefix(input: &str) -> Result<(Value, &str)> {
    let mut decoder = Decoder::new(input);
    let value = decoder.decode_value()?;
    Ok((value, decoder.remaining()))
}

/// Decode bencode into a compact JSON string (object keys ascending).
pub fn decode_json(input: &str) -> Result<String> {
    let value = decode(input)?;
    Ok(serde_json::to_string(&value)?)
}

/// A cursor over one bencode input.
///
/// Each decoder owns its own position, so independent decoders never observe
/// each other's progress. After an error the position is unspecified.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    config: DecoderConfig,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, DecoderConfig::default())
    }

    pub fn with_config(input: &'a str, config: DecoderConfig) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            config,
        }
    }

    /// The input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume the decoder, returning the unconsumed input.
    ///
    /// In strict mode any unconsumed input is an error.
    pub fn finish(self) -> Result<&'a str> {
        let rest = self.remaining();
        if self.config.strict && !rest.is_empty() {
            return Err(BencodeError::TrailingData);
        }
        Ok(rest)
    }

    /// Decode one value starting at the cursor.
    pub fn decode_value(&mut self) -> Result<Value> {
        if self.depth > self.config.max_depth {
            return Err(BencodeError::NestingTooDeep);
        }
        let c = self.peek().ok_or(BencodeError::UnexpectedEof)?;
        match classify(c) {
            Some(Production::Integer) => self.decode_integer().map(Value::Integer),
            Some(Production::Text) => self.decode_text().map(Value::Text),
            Some(Production::List) => self.decode_list().map(Value::List),
            Some(Production::Dict) => self.decode_dict().map(Value::Map),
            None => Err(BencodeError::UnexpectedChar(c)),
        }
    }

    /// `i` [`-`] digit+ `e`
    fn decode_integer(&mut self) -> Result<i64> {
        self.expect(INTEGER_START)?;
        let start = self.pos;
        let negative = self.peek() == Some(MINUS);
        if negative {
            self.pos += MINUS.len_utf8();
        }
        let digits = self.take_digits()?;
        let literal = &self.input[start..self.pos];
        self.expect(END)?;

        if self.config.strict && (negative || digits.len() > 1) && digits.starts_with('0') {
            tracing::trace!(literal, "rejecting non-canonical integer");
            return Err(BencodeError::NonCanonicalInteger(literal.to_string()));
        }
        literal
            .parse()
            .map_err(|_| BencodeError::InvalidInteger(literal.to_string()))
    }

    /// digit+ `:` char{length}
    fn decode_text(&mut self) -> Result<String> {
        let digits = self.take_digits()?;
        self.expect(TEXT_SEPARATOR)?;

        if self.config.strict && digits.len() > 1 && digits.starts_with('0') {
            tracing::trace!(length = digits, "rejecting zero-padded text length");
            return Err(BencodeError::NonCanonicalInteger(digits.to_string()));
        }
        let declared: usize = digits
            .parse()
            .map_err(|_| BencodeError::InvalidLength(digits.to_string()))?;

        let rest = self.remaining();
        let end = match declared.checked_sub(1) {
            None => 0,
            Some(last) => match rest.char_indices().nth(last) {
                Some((i, c)) => i + c.len_utf8(),
                None => {
                    return Err(BencodeError::LengthExceedsInput {
                        declared,
                        remaining: rest.chars().count(),
                    })
                }
            },
        };
        self.pos += end;
        Ok(rest[..end].to_string())
    }

    /// `l` value* `e`
    fn decode_list(&mut self) -> Result<Vec<Value>> {
        self.expect(LIST_START)?;
        let items = self.nested(|d| {
            let mut items = Vec::new();
            while !d.at_end()? {
                items.push(d.decode_value()?);
            }
            Ok(items)
        })?;
        self.expect(END)?;
        Ok(items)
    }

    /// `d` (text value)* `e`
    fn decode_dict(&mut self) -> Result<BTreeMap<String, Value>> {
        self.expect(DICT_START)?;
        let map = self.nested(|d| {
            let mut map: BTreeMap<String, Value> = BTreeMap::new();
            while !d.at_end()? {
                let key = d.decode_text()?;
                if d.config.strict {
                    if let Some((last, _)) = map.last_key_value() {
                        if key <= *last {
                            tracing::trace!(key = %key, "rejecting out-of-order dictionary key");
                            return Err(BencodeError::UnsortedKey(key));
                        }
                    }
                }
                let value = d.decode_value()?;
                map.insert(key, value);
            }
            Ok(map)
        })?;
        self.expect(END)?;
        Ok(map)
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Whether the next character terminates the enclosing list or dictionary.
    fn at_end(&self) -> Result<bool> {
        match self.peek() {
            Some(END) => Ok(true),
            Some(_) => Ok(false),
            None => Err(BencodeError::UnexpectedEof),
        }
    }

    /// Consume a maximal, non-empty run of ASCII digits.
    fn take_digits(&mut self) -> Result<&'a str> {
        let rest = self.remaining();
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(if rest.is_empty() {
                BencodeError::UnexpectedEof
            } else {
                BencodeError::MissingDigits
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(BencodeError::UnexpectedChar(c)),
            None => Err(BencodeError::UnexpectedEof),
        }
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }
}
