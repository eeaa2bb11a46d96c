//! The navigator: binds a decoding engine and configuration, and hands out
//! [`Node`]s over raw, wrapped, or concrete values.

use std::any::type_name;
use std::borrow::Cow;

use json_nav_any::AnyValue;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::NavigatorConfig;
use crate::decoder::{Decoder, Engine};
use crate::error::NavError;
use crate::node::Node;
use crate::target::{Concrete, Target};

/// Entry point for navigation.
///
/// ```
/// use json_nav::Navigator;
///
/// let nav = Navigator::new();
/// let doc = nav.load(r#"{"a": {"b": [10, 20, 30]}}"#.as_bytes());
/// assert_eq!(doc.get("a")?.get("b")?.get(2)?.as_i64()?, 30);
/// # Ok::<(), json_nav::NavError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navigator<D = Engine> {
    decoder: D,
    config: NavigatorConfig,
}

impl Navigator<Engine> {
    /// A navigator using the JSON engine and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator using the built-in engine selected by `config.format`.
    pub fn from_config(config: NavigatorConfig) -> Self {
        Self {
            decoder: Engine::from(config.format),
            config,
        }
    }
}

impl<D: Decoder> Navigator<D> {
    /// A navigator using a caller-supplied engine.
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            config: NavigatorConfig::default(),
        }
    }

    pub fn with_diagnostic_limit(mut self, limit: Option<usize>) -> Self {
        self.config.diagnostic_limit = limit;
        self
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Wraps undecoded input. Nothing is decoded until the node is accessed.
    pub fn load<'a>(&'a self, bytes: impl Into<Cow<'a, [u8]>>) -> Node<'a, D> {
        self.node(Target::Raw(bytes.into()))
    }

    /// Wraps an already-decoded value.
    pub fn wrap(&self, value: impl Into<AnyValue>) -> Node<'_, D> {
        self.node(Target::Wrapped(value.into()))
    }

    /// Wraps a value whose erasure has already been stripped.
    pub fn concrete(&self, value: impl Into<Concrete>) -> Node<'_, D> {
        self.node(Target::Concrete(value.into()))
    }

    pub fn node<'a>(&'a self, target: Target<'a>) -> Node<'a, D> {
        Node::new(self, target)
    }

    /// Decodes raw input into `T` with the bound engine.
    pub(crate) fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, NavError> {
        let requested = type_name::<T>();
        trace!(
            engine = self.decoder.id(),
            len = bytes.len(),
            requested,
            "decoding raw input"
        );
        self.decoder.decode(bytes).map_err(|err| {
            debug!(engine = self.decoder.id(), requested, %err, "decode failed");
            NavError::Decoding {
                requested,
                context: self.config.render_input(bytes),
                message: err.to_string(),
            }
        })
    }
}
