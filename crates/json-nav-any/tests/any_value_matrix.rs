use json_nav_any::{AnyValue, Mapping, Scalar, ScalarKind, Shape};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        "\\PC{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("\\PC{0,4}", inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn decoding_matches_conversion(value in arb_json()) {
        let text = serde_json::to_string(&value).unwrap();
        let decoded: AnyValue = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(&decoded, &AnyValue::from(value.clone()));
        prop_assert_eq!(Value::from(&decoded), value);
    }

    #[test]
    fn children_are_always_any(value in arb_json()) {
        fn check(value: &AnyValue) -> bool {
            match value {
                AnyValue::Scalar(_) => true,
                AnyValue::Sequence(items) => items.iter().all(check),
                AnyValue::Mapping(entries) => entries.values().all(check),
            }
        }
        prop_assert!(check(&AnyValue::from(value)));
    }
}

#[test]
fn floats_keep_their_value() {
    let value: AnyValue = serde_json::from_str("[1.25, -0.5, 1e3]").unwrap();
    assert_eq!(Value::from(value), json!([1.25, -0.5, 1000.0]));
}

#[test]
fn top_level_scalars_decode() {
    assert_eq!(
        serde_json::from_str::<AnyValue>("\"s\"").unwrap(),
        AnyValue::Scalar(Scalar::String("s".into()))
    );
    assert_eq!(
        serde_json::from_str::<AnyValue>("null").unwrap().shape(),
        Shape::Scalar(ScalarKind::Null)
    );
}

#[test]
fn mapping_of_any_accepts_mixed_values() {
    let entries: Mapping =
        serde_json::from_str(r#"{"n": 1, "s": "x", "a": [], "o": {}, "z": null}"#).unwrap();
    let shapes: Vec<Shape> = entries.values().map(AnyValue::shape).collect();
    assert_eq!(
        shapes,
        vec![
            Shape::Sequence,
            Shape::Scalar(ScalarKind::Number),
            Shape::Mapping,
            Shape::Scalar(ScalarKind::String),
            Shape::Scalar(ScalarKind::Null),
        ]
    );
}

#[test]
fn any_value_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnyValue>();
}
