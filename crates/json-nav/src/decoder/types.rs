//! Common decoder trait and errors.

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML decode error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// A structured-decoding engine: turns raw serialized bytes into any
/// serde-deserializable type.
pub trait Decoder {
    /// Short engine name used in logs.
    fn id(&self) -> &'static str;
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError>;
}
