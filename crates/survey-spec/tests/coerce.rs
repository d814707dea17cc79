use proptest::prelude::*;

use survey_spec::{TypedValue, ValueType, coerce};

#[test]
fn int_coercion_falls_back_to_zero() {
    assert_eq!(coerce("42", ValueType::Int), TypedValue::Int(42));
    assert_eq!(coerce("notanumber", ValueType::Int), TypedValue::Int(0));
    assert_eq!(coerce("", ValueType::Int), TypedValue::Int(0));
}

#[test]
fn boolean_coercion_accepts_true_and_yes() {
    assert_eq!(coerce("Yes", ValueType::Boolean), TypedValue::Bool(true));
    assert_eq!(coerce("true", ValueType::Boolean), TypedValue::Bool(true));
    assert_eq!(coerce("TRUE", ValueType::Boolean), TypedValue::Bool(true));
    assert_eq!(coerce("no", ValueType::Boolean), TypedValue::Bool(false));
    assert_eq!(coerce("false", ValueType::Boolean), TypedValue::Bool(false));
    assert_eq!(coerce("", ValueType::Boolean), TypedValue::Bool(false));
}

#[test]
fn string_coercion_is_passthrough() {
    assert_eq!(
        coerce("hello", ValueType::String),
        TypedValue::String("hello".into())
    );
}

#[test]
fn typed_values_serialize_untagged() {
    let json = serde_json::to_value(vec![
        TypedValue::String("a".into()),
        TypedValue::Int(7),
        TypedValue::Bool(true),
    ])
    .expect("typed values should serialize");
    assert_eq!(json, serde_json::json!(["a", 7, true]));
}

proptest! {
    #[test]
    fn any_decimal_int_round_trips(value in any::<i64>()) {
        prop_assert_eq!(coerce(&value.to_string(), ValueType::Int), TypedValue::Int(value));
    }

    #[test]
    fn non_numeric_text_coerces_to_zero(text in "[a-zA-Z ]{1,12}") {
        prop_assert_eq!(coerce(&text, ValueType::Int), TypedValue::Int(0));
    }
}
