use crate::answers::TypedValue;
use crate::spec::ValueType;

/// Converts a resolved string into the question's declared type.
///
/// Never fails: an unparsable integer becomes `0`.
pub fn coerce(value: &str, value_type: ValueType) -> TypedValue {
    match value_type {
        ValueType::Int => TypedValue::Int(value.parse::<i64>().unwrap_or(0)),
        ValueType::Boolean => TypedValue::Bool(value.eq_ignore_ascii_case("true") || value == "Yes"),
        ValueType::String => TypedValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_is_case_sensitive() {
        assert_eq!(coerce("yes", ValueType::Boolean), TypedValue::Bool(false));
        assert_eq!(coerce("Yes", ValueType::Boolean), TypedValue::Bool(true));
    }

    #[test]
    fn signed_integers_parse() {
        assert_eq!(coerce("-17", ValueType::Int), TypedValue::Int(-17));
        assert_eq!(coerce("+3", ValueType::Int), TypedValue::Int(3));
        assert_eq!(coerce(" 3", ValueType::Int), TypedValue::Int(0));
    }
}
