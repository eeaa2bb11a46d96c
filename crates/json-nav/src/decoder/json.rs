use serde::de::DeserializeOwned;

use super::types::{DecodeError, Decoder};

/// The default engine, backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn id(&self) -> &'static str {
        "json"
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
