//! Conversions between [`AnyValue`] and [`serde_json::Value`].
//!
//! Both directions are lossless: the two types describe the same data model,
//! differing only in how mappings are keyed.

use serde_json::{Map, Value};

use crate::value::{AnyValue, Scalar};

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AnyValue::Scalar(Scalar::Null),
            Value::Bool(b) => AnyValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => AnyValue::Scalar(Scalar::Number(n)),
            Value::String(s) => AnyValue::Scalar(Scalar::String(s)),
            Value::Array(items) => AnyValue::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => AnyValue::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<&Scalar> for Value {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<&AnyValue> for Value {
    fn from(value: &AnyValue) -> Self {
        match value {
            AnyValue::Scalar(scalar) => scalar.into(),
            AnyValue::Sequence(items) => Value::Array(items.iter().map(Into::into).collect()),
            AnyValue::Mapping(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), value.into());
                }
                Value::Object(map)
            }
        }
    }
}

impl From<AnyValue> for Value {
    fn from(value: AnyValue) -> Self {
        match value {
            AnyValue::Scalar(Scalar::Null) => Value::Null,
            AnyValue::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            AnyValue::Scalar(Scalar::Number(n)) => Value::Number(n),
            AnyValue::Scalar(Scalar::String(s)) => Value::String(s),
            AnyValue::Sequence(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            AnyValue::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}
