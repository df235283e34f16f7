//! Decoder configuration.

/// Nesting limit used by [`DecoderConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling how permissive the decoder is.
///
/// The default is lenient: integers with leading zeros (`i007e`) or a signed
/// zero (`i-0e`) are accepted, dictionaries may arrive with keys in any order
/// (they are re-sorted, last duplicate wins), and anything after the first
/// complete value is ignored. [`strict`](Self::strict) turns all of those into
/// errors so that only canonical encodings decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum list/dictionary nesting. The top-level value is depth 0.
    pub max_depth: usize,
    /// Reject non-canonical input instead of normalizing it.
    pub strict: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

impl DecoderConfig {
    /// Strict configuration with the default nesting limit.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
