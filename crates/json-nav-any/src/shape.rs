//! Runtime shape classification.

use std::fmt;

/// The kind of a scalar leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Null,
    Bool,
    Number,
    String,
}

/// The runtime classification of a JSON-shaped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar(ScalarKind),
    Sequence,
    Mapping,
}

impl Shape {
    pub fn is_scalar(self) -> bool {
        matches!(self, Shape::Scalar(_))
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalarKind::Null => "null",
            ScalarKind::Bool => "bool",
            ScalarKind::Number => "number",
            ScalarKind::String => "string",
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(kind) => fmt::Display::fmt(kind, f),
            Shape::Sequence => f.write_str("sequence"),
            Shape::Mapping => f.write_str("mapping"),
        }
    }
}
