//! Panicking accessors over the same logic as [`Node`].

use serde::de::DeserializeOwned;

use crate::decoder::{Decoder, Engine};
use crate::error::NavError;
use crate::node::Node;
use crate::path::PathStep;

/// A [`Node`] whose accessors panic with the [`NavError`] message instead of
/// returning it. For call sites where invalid data is a bug.
///
/// ```
/// use json_nav::Navigator;
///
/// let nav = Navigator::new();
/// let doc = nav.load(r#"{"x": [1, 2]}"#.as_bytes()).strict();
/// assert_eq!(doc.get("x").get(1).as_i64(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Strict<'a, D = Engine>(Node<'a, D>);

impl<'a, D: Decoder> Strict<'a, D> {
    pub(crate) fn new(node: Node<'a, D>) -> Self {
        Self(node)
    }

    pub fn into_node(self) -> Node<'a, D> {
        self.0
    }

    #[track_caller]
    pub fn get(&self, step: impl Into<PathStep>) -> Self {
        Self(or_panic(self.0.get(step)))
    }

    #[track_caller]
    pub fn index(&self, index: i64) -> Self {
        Self(or_panic(self.0.index(index)))
    }

    #[track_caller]
    pub fn key(&self, key: &str) -> Self {
        Self(or_panic(self.0.key(key)))
    }

    #[track_caller]
    pub fn pointer(&self, pointer: &str) -> Self {
        Self(or_panic(self.0.pointer(pointer)))
    }

    #[track_caller]
    pub fn cast<T: DeserializeOwned>(&self) -> T {
        or_panic(self.0.cast())
    }

    #[track_caller]
    pub fn as_string(&self) -> String {
        or_panic(self.0.as_string())
    }

    #[track_caller]
    pub fn as_f64(&self) -> f64 {
        or_panic(self.0.as_f64())
    }

    #[track_caller]
    pub fn as_i64(&self) -> i64 {
        or_panic(self.0.as_i64())
    }
}

#[track_caller]
fn or_panic<T>(result: Result<T, NavError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use crate::Navigator;

    #[test]
    fn strict_chain_succeeds() {
        let nav = Navigator::new();
        let doc = nav.load(&br#"{"a": {"b": [10, 20, 30]}}"#[..]).strict();
        assert_eq!(doc.pointer("/a/b/2").as_i64(), 30);
        assert_eq!(doc.key("a").key("b").index(0).cast::<u32>(), 10);
    }

    #[test]
    #[should_panic(expected = "index is 5, but array count is 3")]
    fn strict_index_panics_with_message() {
        let nav = Navigator::new();
        nav.load(&b"[1, 2, 3]"[..]).strict().get(5);
    }

    #[test]
    #[should_panic(expected = r#"the key "y" isn't present"#)]
    fn strict_key_panics_with_message() {
        let nav = Navigator::new();
        nav.load(&br#"{"x": 1}"#[..]).strict().get("y");
    }

    #[test]
    fn strict_and_recoverable_share_results() {
        let nav = Navigator::new();
        let node = nav.load(&br#"{"s": "v"}"#[..]);
        assert_eq!(
            node.clone().strict().get("s").as_string(),
            node.get("s").unwrap().as_string().unwrap()
        );
        assert_eq!(node.strict().into_node().kind(), crate::TargetKind::Raw);
    }
}
