//! [`AnyValue`] and its scalar payload.

use std::collections::BTreeMap;

use serde_json::Number;

use crate::shape::{ScalarKind, Shape};

/// String-keyed children of a mapping. Key order carries no meaning.
pub type Mapping = BTreeMap<String, AnyValue>;

/// A JSON leaf value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Null => ScalarKind::Null,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::String(_) => ScalarKind::String,
        }
    }
}

/// A type-erased JSON-shaped value.
///
/// Every element of a sequence and every value of a mapping is itself an
/// `AnyValue`, so no un-erased payload can exist below the root.
///
/// ```
/// use json_nav_any::{AnyValue, Shape};
///
/// let value: AnyValue = serde_json::from_str(r#"{"a": [1, "two", null]}"#).unwrap();
/// assert_eq!(value.shape(), Shape::Mapping);
/// let items = value.as_mapping().unwrap()["a"].as_sequence().unwrap();
/// assert_eq!(items.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue {
    Scalar(Scalar),
    Sequence(Vec<AnyValue>),
    Mapping(Mapping),
}

impl Default for AnyValue {
    fn default() -> Self {
        AnyValue::Scalar(Scalar::Null)
    }
}

impl AnyValue {
    pub fn null() -> Self {
        AnyValue::Scalar(Scalar::Null)
    }

    /// Returns the runtime shape of the held value.
    pub fn shape(&self) -> Shape {
        match self {
            AnyValue::Scalar(scalar) => Shape::Scalar(scalar.kind()),
            AnyValue::Sequence(_) => Shape::Sequence,
            AnyValue::Mapping(_) => Shape::Mapping,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            AnyValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[AnyValue]> {
        match self {
            AnyValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            AnyValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, AnyValue::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, AnyValue::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, AnyValue::Mapping(_))
    }
}

impl From<Scalar> for AnyValue {
    fn from(scalar: Scalar) -> Self {
        AnyValue::Scalar(scalar)
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        AnyValue::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for AnyValue {
    fn from(value: i32) -> Self {
        AnyValue::Scalar(Scalar::Number(value.into()))
    }
}

impl From<i64> for AnyValue {
    fn from(value: i64) -> Self {
        AnyValue::Scalar(Scalar::Number(value.into()))
    }
}

impl From<u64> for AnyValue {
    fn from(value: u64) -> Self {
        AnyValue::Scalar(Scalar::Number(value.into()))
    }
}

/// Non-finite floats have no JSON representation and become null.
impl From<f64> for AnyValue {
    fn from(value: f64) -> Self {
        AnyValue::Scalar(Number::from_f64(value).map_or(Scalar::Null, Scalar::Number))
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        AnyValue::Scalar(Scalar::String(value))
    }
}

impl From<Vec<AnyValue>> for AnyValue {
    fn from(items: Vec<AnyValue>) -> Self {
        AnyValue::Sequence(items)
    }
}

impl From<Mapping> for AnyValue {
    fn from(entries: Mapping) -> Self {
        AnyValue::Mapping(entries)
    }
}

impl FromIterator<AnyValue> for AnyValue {
    fn from_iter<I: IntoIterator<Item = AnyValue>>(iter: I) -> Self {
        AnyValue::Sequence(iter.into_iter().collect())
    }
}

impl FromIterator<(String, AnyValue)> for AnyValue {
    fn from_iter<I: IntoIterator<Item = (String, AnyValue)>>(iter: I) -> Self {
        AnyValue::Mapping(iter.into_iter().collect())
    }
}
