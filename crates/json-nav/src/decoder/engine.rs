//! Built-in engine selection.

use serde::de::DeserializeOwned;

use super::json::JsonDecoder;
use super::toml::TomlDecoder;
use super::types::{DecodeError, Decoder};
use crate::config::Format;

/// One of the built-in decoders, chosen at runtime from a [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Json(JsonDecoder),
    Toml(TomlDecoder),
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Json(JsonDecoder)
    }
}

impl From<Format> for Engine {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Engine::Json(JsonDecoder),
            Format::Toml => Engine::Toml(TomlDecoder),
        }
    }
}

impl Decoder for Engine {
    fn id(&self) -> &'static str {
        match self {
            Engine::Json(decoder) => decoder.id(),
            Engine::Toml(decoder) => decoder.id(),
        }
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        match self {
            Engine::Json(decoder) => decoder.decode(bytes),
            Engine::Toml(decoder) => decoder.decode(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_selects_engine() {
        assert_eq!(Engine::from(Format::Json).id(), "json");
        assert_eq!(Engine::from(Format::Toml).id(), "toml");
        assert_eq!(Engine::default(), Engine::Json(JsonDecoder));
    }
}
