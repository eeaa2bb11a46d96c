//! Path steps and JSON Pointer (RFC 6901) helpers.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("json pointer {0:?} must be empty or start with '/'")]
    NotAbsolute(String),
    #[error("json pointer token {0:?} has a '~' not followed by '0' or '1'")]
    InvalidEscape(String),
}

/// One subscript into a sequence or a mapping.
///
/// Indices are signed so that a negative index is reported as out of range
/// rather than rejected at the call site. There is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Index(i64),
    Key(String),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(index) => write!(f, "[{index}]"),
            PathStep::Key(key) => write!(f, "[{key:?}]"),
        }
    }
}

impl From<i64> for PathStep {
    fn from(index: i64) -> Self {
        PathStep::Index(index)
    }
}

impl From<i32> for PathStep {
    fn from(index: i32) -> Self {
        PathStep::Index(index.into())
    }
}

impl From<u32> for PathStep {
    fn from(index: u32) -> Self {
        PathStep::Index(index.into())
    }
}

impl From<isize> for PathStep {
    fn from(index: isize) -> Self {
        PathStep::Index(i64::try_from(index).unwrap_or(i64::MIN))
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<&String> for PathStep {
    fn from(key: &String) -> Self {
        PathStep::Key(key.clone())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

/// Splits a JSON Pointer into its reference tokens, decoding `~1` as `/` and
/// `~0` as `~`.
///
/// `""` is the whole document and yields no tokens; `"/"` yields one empty
/// key.
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, PointerError> {
    match pointer.strip_prefix('/') {
        Some(tokens) => tokens.split('/').map(decode_token).collect(),
        None if pointer.is_empty() => Ok(Vec::new()),
        None => Err(PointerError::NotAbsolute(pointer.to_string())),
    }
}

fn decode_token(token: &str) -> Result<String, PointerError> {
    let mut decoded = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => decoded.push('~'),
            Some('1') => decoded.push('/'),
            _ => return Err(PointerError::InvalidEscape(token.to_string())),
        }
    }
    Ok(decoded)
}

/// Interprets a pointer token against a sequence of `len` elements.
///
/// Returns `None` when the token is not an array index, so the caller can fall
/// back to a key lookup. `-` names the slot past the end, which is never a
/// valid element.
pub(crate) fn array_index(token: &str, len: usize) -> Option<i64> {
    if token == "-" {
        return Some(i64::try_from(len).unwrap_or(i64::MAX));
    }
    let digits_only = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    Some(token.parse().unwrap_or(i64::MAX))
}
