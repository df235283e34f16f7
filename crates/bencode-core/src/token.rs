//! Grammar markers and leading-token classification.

pub(crate) const INTEGER_START: char = 'i';
pub(crate) const LIST_START: char = 'l';
pub(crate) const DICT_START: char = 'd';
/// Terminates integers, lists and dictionaries.
pub(crate) const END: char = 'e';
pub(crate) const TEXT_SEPARATOR: char = ':';
pub(crate) const MINUS: char = '-';

/// The four bencode productions, as selected by the first unconsumed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Production {
    Integer,
    Text,
    List,
    Dict,
}

/// Classify a leading character. `None` means no production starts with it.
pub(crate) fn classify(c: char) -> Option<Production> {
    match c {
        INTEGER_START => Some(Production::Integer),
        LIST_START => Some(Production::List),
        DICT_START => Some(Production::Dict),
        c if c.is_ascii_digit() => Some(Production::Text),
        _ => None,
    }
}
