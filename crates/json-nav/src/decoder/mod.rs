//! Structured-decoding engines consumed by the navigator.

mod engine;
mod json;
mod toml;
mod types;

pub use engine::Engine;
pub use json::JsonDecoder;
pub use types::{DecodeError, Decoder};

pub use self::toml::TomlDecoder;
