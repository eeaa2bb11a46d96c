//! `Deserialize` for [`AnyValue`], so a decoding engine can produce it without
//! knowing the concrete shape up front.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

use crate::value::{AnyValue, Mapping, Scalar};

/// Single key of the map the `toml` deserializer hands out for a datetime.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

struct AnyValueVisitor;

impl<'de> Visitor<'de> for AnyValueVisitor {
    type Value = AnyValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON-shaped value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(AnyValue::Scalar(Scalar::Bool(value)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(AnyValue::Scalar(Scalar::Number(value.into())))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(AnyValue::Scalar(Scalar::Number(value.into())))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(AnyValue::Scalar(
            Number::from_f64(value).map_or(Scalar::Null, Scalar::Number),
        ))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(AnyValue::Scalar(Scalar::String(value.to_string())))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(AnyValue::Scalar(Scalar::String(value)))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(AnyValue::null())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(AnyValue::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AnyValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Mapping::new();
        while let Some((key, value)) = map.next_entry::<String, AnyValue>()? {
            entries.insert(key, value);
        }
        Ok(collapse_datetime(entries))
    }
}

/// A datetime is a scalar in its source format; keep its text instead of the
/// carrier map.
fn collapse_datetime(mut entries: Mapping) -> AnyValue {
    match entries.pop_first() {
        Some((key, AnyValue::Scalar(Scalar::String(text))))
            if entries.is_empty() && key == TOML_DATETIME_KEY =>
        {
            AnyValue::Scalar(Scalar::String(text))
        }
        Some((key, value)) => {
            entries.insert(key, value);
            AnyValue::Mapping(entries)
        }
        None => AnyValue::Mapping(entries),
    }
}

impl<'de> Deserialize<'de> for AnyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AnyValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match AnyValue::deserialize(deserializer)? {
            AnyValue::Scalar(scalar) => Ok(scalar),
            other => Err(de::Error::custom(format_args!(
                "expected a scalar, found a {}",
                other.shape()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScalarKind, Shape};

    #[test]
    fn decodes_heterogeneous_array() {
        let items: Vec<AnyValue> =
            serde_json::from_str(r#"[1, "a", true, null, [2], {"k": 3.5}]"#).unwrap();
        let shapes: Vec<Shape> = items.iter().map(AnyValue::shape).collect();
        assert_eq!(
            shapes,
            vec![
                Shape::Scalar(ScalarKind::Number),
                Shape::Scalar(ScalarKind::String),
                Shape::Scalar(ScalarKind::Bool),
                Shape::Scalar(ScalarKind::Null),
                Shape::Sequence,
                Shape::Mapping,
            ]
        );
    }

    #[test]
    fn decodes_object_of_any() {
        let entries: Mapping = serde_json::from_str(r#"{"x": {"y": []}, "z": "s"}"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries["x"].as_mapping().unwrap()["y"].is_sequence());
        assert_eq!(entries["z"], AnyValue::from("s"));
    }

    #[test]
    fn scalar_rejects_aggregates() {
        let err = serde_json::from_str::<Scalar>("[1]").unwrap_err();
        assert!(err.to_string().contains("expected a scalar, found a sequence"));
        assert_eq!(
            serde_json::from_str::<Scalar>("\"s\"").unwrap(),
            Scalar::String("s".into())
        );
    }

    #[test]
    fn datetime_carrier_collapses_to_string() {
        let value: AnyValue =
            serde_json::from_str(r#"{"$__toml_private_datetime": "1979-05-27"}"#).unwrap();
        assert_eq!(value, AnyValue::from("1979-05-27"));

        let value: AnyValue = serde_json::from_str(
            r#"{"$__toml_private_datetime": "1979-05-27", "other": 1}"#,
        )
        .unwrap();
        assert!(value.is_mapping());

        let value: AnyValue = serde_json::from_str(r#"{"only": "x"}"#).unwrap();
        assert_eq!(value.as_mapping().unwrap()["only"], AnyValue::from("x"));
    }

    #[test]
    fn invalid_input_is_an_error_not_a_panic() {
        assert!(serde_json::from_str::<AnyValue>("{").is_err());
        assert!(serde_json::from_str::<Vec<AnyValue>>("{}").is_err());
    }
}
