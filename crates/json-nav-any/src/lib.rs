//! json-nav-any - Type-erased carrier for JSON-shaped values.
//!
//! [`AnyValue`] holds exactly one value whose shape is only known at runtime:
//! a [`Scalar`], an ordered sequence of `AnyValue`, or a string-keyed mapping
//! of `AnyValue`. It implements [`serde::Deserialize`], so any serde-driven
//! decoding engine can produce `Vec<AnyValue>` or `BTreeMap<String, AnyValue>`
//! without knowing the element types up front.
//!
//! The navigation layer built on top of it reads values and never mutates
//! them in place.

mod de;
mod json;
mod ser;
mod shape;
mod value;

pub use shape::{ScalarKind, Shape};
pub use value::{AnyValue, Mapping, Scalar};
