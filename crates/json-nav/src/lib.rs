//! json-nav - Lazy, type-checked navigation over decoded JSON value graphs.
//!
//! A [`Navigator`] binds a decoding engine and a [`NavigatorConfig`]. It hands
//! out [`Node`]s over raw bytes, [`AnyValue`]s, or already-unwrapped
//! [`Concrete`] values. Nodes support index and key subscripts, JSON Pointer
//! paths, and casts into any `serde::Deserialize` type:
//!
//! ```
//! use json_nav::{NavError, Navigator};
//!
//! let nav = Navigator::new();
//! let doc = nav.load(r#"{"a": {"b": [10, 20, 30]}}"#.as_bytes());
//!
//! assert_eq!(doc.get("a")?.get("b")?.get(2)?.as_i64()?, 30);
//! assert_eq!(
//!     doc.get("a")?.get("b")?.get(5).unwrap_err(),
//!     NavError::IndexOutOfRange { index: 5, len: 3 }
//! );
//! # Ok::<(), NavError>(())
//! ```
//!
//! Raw input is decoded on first access, straight into the requested type.
//! Decoded aggregates come back with their children still wrapped, so the
//! next access resolves one more level. Every failure is a [`NavError`];
//! [`Node::strict`] opts into panicking accessors instead.

mod config;
mod decoder;
mod error;
mod narrow;
mod navigator;
mod node;
mod path;
mod strict;
mod target;

pub use json_nav_any::{AnyValue, Mapping, Scalar, ScalarKind, Shape};

pub use config::{Format, NavigatorConfig};
pub use decoder::{DecodeError, Decoder, Engine, JsonDecoder, TomlDecoder};
pub use error::{ConfigError, NavError};
pub use navigator::Navigator;
pub use node::Node;
pub use path::{parse_json_pointer, PathStep, PointerError};
pub use strict::Strict;
pub use target::{Concrete, Target, TargetKind};
