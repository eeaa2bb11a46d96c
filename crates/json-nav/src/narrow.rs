//! Narrowing of already-decoded values into concrete Rust types.
//!
//! A [`View`] is driven through serde directly, so the requested type sees
//! the value's real shape: a sequence is only ever offered as a sequence and
//! a mapping only as a mapping.

use std::any::type_name;

use json_nav_any::{AnyValue, Mapping, Scalar};
use serde::de::value::{Error, MapAccessDeserializer, MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeOwned, Deserializer, IntoDeserializer, Unexpected, Visitor};
use serde::forward_to_deserialize_any;
use serde_json::Number;
use tracing::trace;

use crate::error::NavError;
use crate::target::View;

/// Narrows an unwrapped value to `T`. Only the shape can mismatch here; the
/// value was already decoded successfully.
pub(crate) fn narrow<T: DeserializeOwned>(view: View<'_>) -> Result<T, NavError> {
    T::deserialize(view).map_err(|err| {
        let actual = view.shape();
        trace!(%actual, requested = type_name::<T>(), "narrowing failed");
        NavError::casting::<T>(actual, err.to_string())
    })
}

impl<'t> View<'t> {
    fn unexpected(self) -> Unexpected<'t> {
        match self {
            View::Scalar(Scalar::Null) => Unexpected::Unit,
            View::Scalar(Scalar::Bool(value)) => Unexpected::Bool(*value),
            View::Scalar(Scalar::Number(number)) => {
                if let Some(n) = number.as_u64() {
                    Unexpected::Unsigned(n)
                } else if let Some(n) = number.as_i64() {
                    Unexpected::Signed(n)
                } else {
                    Unexpected::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            View::Scalar(Scalar::String(text)) => Unexpected::Str(text),
            View::Sequence(_) => Unexpected::Seq,
            View::Mapping(_) => Unexpected::Map,
        }
    }

    fn visit_sequence<V: Visitor<'t>>(items: &'t [AnyValue], visitor: V) -> Result<V::Value, Error> {
        let mut seq = SeqDeserializer::<_, Error>::new(items.iter().map(View::from));
        let value = visitor.visit_seq(&mut seq)?;
        seq.end()?;
        Ok(value)
    }

    fn visit_mapping<V: Visitor<'t>>(
        entries: &'t Mapping,
        visitor: V,
    ) -> Result<V::Value, Error> {
        let mut map = MapDeserializer::<_, Error>::new(
            entries
                .iter()
                .map(|(key, value)| (key.as_str(), View::from(value))),
        );
        let value = visitor.visit_map(&mut map)?;
        map.end()?;
        Ok(value)
    }
}

fn visit_number<'de, V: Visitor<'de>>(number: &Number, visitor: V) -> Result<V::Value, Error> {
    if let Some(n) = number.as_u64() {
        visitor.visit_u64(n)
    } else if let Some(n) = number.as_i64() {
        visitor.visit_i64(n)
    } else if let Some(n) = number.as_f64() {
        visitor.visit_f64(n)
    } else {
        Err(de::Error::custom(format_args!("unrepresentable number {number}")))
    }
}

impl<'t> Deserializer<'t> for View<'t> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'t>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            View::Scalar(Scalar::Null) => visitor.visit_unit(),
            View::Scalar(Scalar::Bool(value)) => visitor.visit_bool(*value),
            View::Scalar(Scalar::Number(number)) => visit_number(number, visitor),
            View::Scalar(Scalar::String(text)) => visitor.visit_borrowed_str(text),
            View::Sequence(items) => Self::visit_sequence(items, visitor),
            View::Mapping(entries) => Self::visit_mapping(entries, visitor),
        }
    }

    fn deserialize_option<V: Visitor<'t>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            View::Scalar(Scalar::Null) => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'t>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'t>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            View::Sequence(items) => Self::visit_sequence(items, visitor),
            _ => Err(de::Error::invalid_type(self.unexpected(), &visitor)),
        }
    }

    fn deserialize_tuple<V: Visitor<'t>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'t>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'t>>(self, visitor: V) -> Result<V::Value, Error> {
        match self {
            View::Mapping(entries) => Self::visit_mapping(entries, visitor),
            _ => Err(de::Error::invalid_type(self.unexpected(), &visitor)),
        }
    }

    // Struct fields come only from a mapping; a sequence is never positional
    // struct input.
    fn deserialize_struct<V: Visitor<'t>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V: Visitor<'t>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self {
            View::Scalar(Scalar::String(text)) => {
                visitor.visit_enum(text.as_str().into_deserializer())
            }
            View::Mapping(entries) if entries.len() == 1 => {
                visitor.visit_enum(MapAccessDeserializer::new(MapDeserializer::new(
                    entries
                        .iter()
                        .map(|(key, value)| (key.as_str(), View::from(value))),
                )))
            }
            _ => Err(de::Error::invalid_type(self.unexpected(), &visitor)),
        }
    }

    fn deserialize_ignored_any<V: Visitor<'t>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        <W: Visitor<'t>>
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct identifier
    }
}

impl<'t> IntoDeserializer<'t, Error> for View<'t> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use json_nav_any::{ScalarKind, Shape};
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    enum Mode {
        Fast,
        Limited(u32),
    }

    fn any(value: Value) -> AnyValue {
        AnyValue::from(value)
    }

    #[test]
    fn sequence_never_narrows_to_struct() {
        let value = any(json!([1, 2]));
        let err = narrow::<Point>(View::from(&value)).unwrap_err();
        let NavError::Casting { actual, reason, .. } = err else {
            panic!("expected a casting error");
        };
        assert_eq!(actual, Shape::Sequence);
        assert!(reason.starts_with("invalid type: sequence"));
    }

    #[test]
    fn nested_sequence_never_narrows_to_struct() {
        #[derive(Debug, Deserialize)]
        struct Outer {
            #[allow(dead_code)]
            p: Point,
        }

        let value = any(json!({"p": [1, 2]}));
        assert!(matches!(
            narrow::<Outer>(View::from(&value)),
            Err(NavError::Casting {
                actual: Shape::Mapping,
                ..
            })
        ));
    }

    #[test]
    fn mapping_narrows_to_struct() {
        let value = any(json!({"x": 1, "y": -2}));
        assert_eq!(narrow::<Point>(View::from(&value)).unwrap(), Point { x: 1, y: -2 });
    }

    #[test]
    fn mapping_never_narrows_to_sequence() {
        let value = any(json!({"x": 1}));
        assert!(narrow::<Vec<AnyValue>>(View::from(&value)).is_err());
        assert!(narrow::<(i64, i64)>(View::from(&value)).is_err());
    }

    #[test]
    fn tuple_length_must_match() {
        let value = any(json!([1, 2, 3]));
        assert!(narrow::<(i64, i64)>(View::from(&value)).is_err());
        assert_eq!(narrow::<(i64, i64, i64)>(View::from(&value)).unwrap(), (1, 2, 3));
    }

    #[test]
    fn scalars_narrow_by_kind() {
        let value = any(json!(300));
        assert_eq!(narrow::<u16>(View::from(&value)).unwrap(), 300);
        assert_eq!(narrow::<f64>(View::from(&value)).unwrap(), 300.0);
        assert!(matches!(
            narrow::<u8>(View::from(&value)),
            Err(NavError::Casting {
                actual: Shape::Scalar(ScalarKind::Number),
                ..
            })
        ));
        assert!(narrow::<String>(View::from(&value)).is_err());

        let value = any(json!(-1.5));
        assert!(narrow::<i64>(View::from(&value)).is_err());

        let value = any(json!(null));
        assert_eq!(narrow::<Option<bool>>(View::from(&value)).unwrap(), None);
        assert!(narrow::<()>(View::from(&value)).is_ok());
    }

    #[test]
    fn enums_from_string_or_single_entry() {
        let value = any(json!("Fast"));
        assert_eq!(narrow::<Mode>(View::from(&value)).unwrap(), Mode::Fast);
        let value = any(json!({"Limited": 3}));
        assert_eq!(narrow::<Mode>(View::from(&value)).unwrap(), Mode::Limited(3));
        let value = any(json!(["Fast"]));
        assert!(narrow::<Mode>(View::from(&value)).is_err());
    }

    #[test]
    fn generic_targets_keep_full_depth() {
        let value = any(json!({"a": [1, {"b": null}]}));
        assert_eq!(
            narrow::<Value>(View::from(&value)).unwrap(),
            json!({"a": [1, {"b": null}]})
        );
        assert_eq!(narrow::<AnyValue>(View::from(&value)).unwrap(), value);
        let entries = narrow::<BTreeMap<String, AnyValue>>(View::from(&value)).unwrap();
        assert!(entries["a"].is_sequence());
    }
}
