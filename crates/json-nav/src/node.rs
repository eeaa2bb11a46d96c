//! Chainable access into a value graph.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use json_nav_any::{AnyValue, Mapping};
use serde::de::DeserializeOwned;

use crate::decoder::{Decoder, Engine};
use crate::error::NavError;
use crate::narrow::narrow;
use crate::navigator::Navigator;
use crate::path::{array_index, parse_json_pointer, PathStep};
use crate::strict::Strict;
use crate::target::{Classified, Target, TargetKind, View};

/// A value of unknown shape, bound to the navigator that decodes it.
///
/// Every accessor classifies the held [`Target`] first: raw input is decoded
/// into exactly the requested type, wrapped values are unwrapped one level,
/// and concrete values are used as-is. Children come back as new nodes, so
/// calls chain with `?`.
pub struct Node<'a, D = Engine> {
    nav: &'a Navigator<D>,
    target: Target<'a>,
}

impl<D> Clone for Node<'_, D> {
    fn clone(&self) -> Self {
        Self {
            nav: self.nav,
            target: self.target.clone(),
        }
    }
}

impl<D> fmt::Debug for Node<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("target", &self.target).finish()
    }
}

impl<'a, D: Decoder> Node<'a, D> {
    pub(crate) fn new(nav: &'a Navigator<D>, target: Target<'a>) -> Self {
        Self { nav, target }
    }

    pub fn kind(&self) -> TargetKind {
        self.target.kind()
    }

    pub fn target(&self) -> &Target<'a> {
        &self.target
    }

    pub fn into_target(self) -> Target<'a> {
        self.target
    }

    pub fn navigator(&self) -> &'a Navigator<D> {
        self.nav
    }

    /// Switches to the panicking variant of every accessor.
    pub fn strict(self) -> Strict<'a, D> {
        Strict::new(self)
    }

    /// Returns the value as `T`.
    ///
    /// Raw input is decoded straight into `T`; a failure is
    /// [`NavError::Decoding`]. Decoded values are unwrapped and narrowed; a
    /// shape mismatch is [`NavError::Casting`].
    pub fn cast<T: DeserializeOwned>(&self) -> Result<T, NavError> {
        match self.target.classify() {
            Classified::Raw(bytes) => self.nav.decode(bytes),
            Classified::Unwrapped(view) => narrow(view),
        }
    }

    /// Returns the elements of a sequence, each still wrapped.
    pub fn as_array(&self) -> Result<Vec<Node<'a, D>>, NavError> {
        let items = self.sequence()?.into_owned();
        Ok(items.into_iter().map(|item| self.nav.wrap(item)).collect())
    }

    /// Returns the entries of a mapping, each value still wrapped.
    pub fn as_object(&self) -> Result<BTreeMap<String, Node<'a, D>>, NavError> {
        let entries = self.mapping()?.into_owned();
        Ok(entries
            .into_iter()
            .map(|(key, value)| (key, self.nav.wrap(value)))
            .collect())
    }

    pub fn get(&self, step: impl Into<PathStep>) -> Result<Node<'a, D>, NavError> {
        match step.into() {
            PathStep::Index(index) => self.index(index),
            PathStep::Key(key) => self.key(&key),
        }
    }

    /// Element `index` of a sequence. Negative indices are out of range.
    pub fn index(&self, index: i64) -> Result<Node<'a, D>, NavError> {
        let items = self.sequence()?;
        let len = items.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position < len)
            .ok_or(NavError::IndexOutOfRange { index, len })?;
        let item = match items {
            Cow::Borrowed(items) => items[position].clone(),
            Cow::Owned(mut items) => items.swap_remove(position),
        };
        Ok(self.child(item))
    }

    /// Value at `key` of a mapping.
    pub fn key(&self, key: &str) -> Result<Node<'a, D>, NavError> {
        let value = match self.mapping()? {
            Cow::Borrowed(entries) => entries.get(key).cloned().ok_or_else(|| missing(key, entries)),
            Cow::Owned(mut entries) => entries.remove(key).ok_or_else(|| missing(key, &entries)),
        }?;
        Ok(self.child(value))
    }

    /// Applies `steps` in order, stopping at the first failure.
    pub fn path<I>(&self, steps: I) -> Result<Node<'a, D>, NavError>
    where
        I: IntoIterator,
        I::Item: Into<PathStep>,
    {
        steps
            .into_iter()
            .try_fold(self.clone(), |node, step| node.get(step))
    }

    /// Follows a JSON Pointer such as `/a/b/2`.
    ///
    /// A token is an index when the current value is a sequence and the token
    /// is a canonical array index; otherwise it is a key. Raw input is decoded
    /// once, at the first token.
    pub fn pointer(&self, pointer: &str) -> Result<Node<'a, D>, NavError> {
        parse_json_pointer(pointer)?
            .iter()
            .try_fold(self.clone(), |node, token| node.token(token))
    }

    /// Shortcut for `cast::<String>()`.
    pub fn as_string(&self) -> Result<String, NavError> {
        self.cast()
    }

    /// Shortcut for `cast::<f64>()`.
    pub fn as_f64(&self) -> Result<f64, NavError> {
        self.cast()
    }

    /// Shortcut for `cast::<i64>()`.
    pub fn as_i64(&self) -> Result<i64, NavError> {
        self.cast()
    }

    fn token(&self, token: &str) -> Result<Node<'a, D>, NavError> {
        match self.target.classify() {
            Classified::Raw(bytes) => {
                let value: AnyValue = self.nav.decode(bytes)?;
                self.nav.wrap(value).token(token)
            }
            Classified::Unwrapped(View::Sequence(items)) => match array_index(token, items.len()) {
                Some(index) => self.index(index),
                None => self.key(token),
            },
            Classified::Unwrapped(_) => self.key(token),
        }
    }

    fn sequence(&self) -> Result<Cow<'_, [AnyValue]>, NavError> {
        match self.target.classify() {
            Classified::Raw(bytes) => self.nav.decode::<Vec<AnyValue>>(bytes).map(Cow::Owned),
            Classified::Unwrapped(View::Sequence(items)) => Ok(Cow::Borrowed(items)),
            Classified::Unwrapped(view) => Err(NavError::casting::<Vec<AnyValue>>(
                view.shape(),
                "expected a sequence",
            )),
        }
    }

    fn mapping(&self) -> Result<Cow<'_, Mapping>, NavError> {
        match self.target.classify() {
            Classified::Raw(bytes) => self.nav.decode::<Mapping>(bytes).map(Cow::Owned),
            Classified::Unwrapped(View::Mapping(entries)) => Ok(Cow::Borrowed(entries)),
            Classified::Unwrapped(view) => Err(NavError::casting::<Mapping>(
                view.shape(),
                "expected a mapping",
            )),
        }
    }

    /// A child is handed out with its own wrapping stripped.
    fn child(&self, value: AnyValue) -> Node<'a, D> {
        self.nav.node(Target::Wrapped(value).unwrap_any())
    }
}

/// Builds the diagnostic for an absent key from the mapping already in hand,
/// so listing the available keys can never fail.
fn missing(key: &str, entries: &Mapping) -> NavError {
    NavError::KeyNotPresent {
        key: key.to_string(),
        available: entries.keys().cloned().collect(),
    }
}
