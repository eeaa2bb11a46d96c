//! Runtime classification of values flowing through the navigator.

use std::borrow::Cow;

use json_nav_any::{AnyValue, Mapping, Scalar, Shape};

/// A value at the moment of access.
#[derive(Debug, Clone, PartialEq)]
pub enum Target<'a> {
    /// Undecoded serialized input. Decoded on first access, once per call.
    Raw(Cow<'a, [u8]>),
    /// A type-erased value produced by a decoding engine.
    Wrapped(AnyValue),
    /// A value with its erasure stripped.
    Concrete(Concrete),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Raw,
    Wrapped,
    Concrete,
}

/// One level of an unwrapped value. Children of aggregates are still
/// [`AnyValue`], so they stay navigable; depth is resolved on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum Concrete {
    Scalar(Scalar),
    Sequence(Vec<AnyValue>),
    Mapping(Mapping),
}

impl Concrete {
    pub fn shape(&self) -> Shape {
        self.view().shape()
    }

    fn view(&self) -> View<'_> {
        match self {
            Concrete::Scalar(scalar) => View::Scalar(scalar),
            Concrete::Sequence(items) => View::Sequence(items),
            Concrete::Mapping(entries) => View::Mapping(entries),
        }
    }
}

impl From<AnyValue> for Concrete {
    fn from(value: AnyValue) -> Self {
        match value {
            AnyValue::Scalar(scalar) => Concrete::Scalar(scalar),
            AnyValue::Sequence(items) => Concrete::Sequence(items),
            AnyValue::Mapping(entries) => Concrete::Mapping(entries),
        }
    }
}

impl From<Concrete> for AnyValue {
    fn from(value: Concrete) -> Self {
        match value {
            Concrete::Scalar(scalar) => AnyValue::Scalar(scalar),
            Concrete::Sequence(items) => AnyValue::Sequence(items),
            Concrete::Mapping(entries) => AnyValue::Mapping(entries),
        }
    }
}

impl From<Scalar> for Concrete {
    fn from(scalar: Scalar) -> Self {
        Concrete::Scalar(scalar)
    }
}

impl From<Vec<AnyValue>> for Concrete {
    fn from(items: Vec<AnyValue>) -> Self {
        Concrete::Sequence(items)
    }
}

impl From<Mapping> for Concrete {
    fn from(entries: Mapping) -> Self {
        Concrete::Mapping(entries)
    }
}

impl Target<'_> {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Raw(_) => TargetKind::Raw,
            Target::Wrapped(_) => TargetKind::Wrapped,
            Target::Concrete(_) => TargetKind::Concrete,
        }
    }

    /// Shape of a decoded target; `None` for raw input.
    pub fn shape(&self) -> Option<Shape> {
        match self.classify() {
            Classified::Raw(_) => None,
            Classified::Unwrapped(view) => Some(view.shape()),
        }
    }

    /// Strips one layer of [`AnyValue`] wrapping.
    ///
    /// Aggregate children stay wrapped. Raw and concrete targets are returned
    /// unchanged, so the operation is idempotent.
    pub fn unwrap_any(self) -> Self {
        match self {
            Target::Wrapped(value) => Target::Concrete(value.into()),
            other => other,
        }
    }

    pub fn into_owned(self) -> Target<'static> {
        match self {
            Target::Raw(bytes) => Target::Raw(Cow::Owned(bytes.into_owned())),
            Target::Wrapped(value) => Target::Wrapped(value),
            Target::Concrete(value) => Target::Concrete(value),
        }
    }

    /// Borrowed form of [`unwrap_any`](Self::unwrap_any), used by every
    /// navigation entry point before it acts.
    pub(crate) fn classify(&self) -> Classified<'_> {
        match self {
            Target::Raw(bytes) => Classified::Raw(bytes),
            Target::Wrapped(value) => Classified::Unwrapped(value.into()),
            Target::Concrete(value) => Classified::Unwrapped(value.view()),
        }
    }
}

impl From<AnyValue> for Target<'_> {
    fn from(value: AnyValue) -> Self {
        Target::Wrapped(value)
    }
}

impl From<Concrete> for Target<'_> {
    fn from(value: Concrete) -> Self {
        Target::Concrete(value)
    }
}

pub(crate) enum Classified<'t> {
    Raw(&'t [u8]),
    Unwrapped(View<'t>),
}

#[derive(Clone, Copy)]
pub(crate) enum View<'t> {
    Scalar(&'t Scalar),
    Sequence(&'t [AnyValue]),
    Mapping(&'t Mapping),
}

impl View<'_> {
    pub(crate) fn shape(self) -> Shape {
        match self {
            View::Scalar(scalar) => Shape::Scalar(scalar.kind()),
            View::Sequence(_) => Shape::Sequence,
            View::Mapping(_) => Shape::Mapping,
        }
    }
}

impl<'t> From<&'t AnyValue> for View<'t> {
    fn from(value: &'t AnyValue) -> Self {
        match value {
            AnyValue::Scalar(scalar) => View::Scalar(scalar),
            AnyValue::Sequence(items) => View::Sequence(items),
            AnyValue::Mapping(entries) => View::Mapping(entries),
        }
    }
}
