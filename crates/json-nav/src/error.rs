//! Error types for navigation and configuration.

use json_nav_any::Shape;
use thiserror::Error;

use crate::path::PointerError;

/// A recoverable navigation failure.
///
/// Every variant carries enough context (requested vs. actual shape, index or
/// key, rendered input) to diagnose the failure without re-running the decode.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    /// Raw input could not be decoded into the requested type.
    #[error("couldn't decode data into `{requested}`: {message}\ndata:\n{context}")]
    Decoding {
        requested: &'static str,
        context: String,
        message: String,
    },
    /// An already-decoded value has the wrong shape for the requested type.
    #[error("tried to unwrap value of shape {actual} as `{requested}`: {reason}")]
    Casting {
        actual: Shape,
        requested: &'static str,
        reason: String,
    },
    #[error("index is {index}, but array count is {len}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("the key {key:?} isn't present in the mapping, available keys are: {available:?}")]
    KeyNotPresent { key: String, available: Vec<String> },
    #[error(transparent)]
    Pointer(#[from] PointerError),
}

impl NavError {
    pub(crate) fn casting<T: ?Sized>(actual: Shape, reason: impl Into<String>) -> Self {
        NavError::Casting {
            actual,
            requested: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigator config: {0}")]
    Parse(#[from] toml::de::Error),
}
