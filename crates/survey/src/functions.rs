//! Default functions available to `function` questions out of the box.

use std::env;

use serde_json::Value as JsonValue;
use survey_spec::{DefaultParams, FunctionRegistry};

/// Registry preloaded with the built-in functions.
pub fn builtin_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    register_builtins(&mut registry);
    registry
}

pub fn register_builtins(registry: &mut FunctionRegistry) {
    registry.register("env", env_default);
    registry.register("uuid", |_: &DefaultParams| uuid::Uuid::new_v4().to_string());
    registry.register("concat", concat_default);
}

/// `env`: value of the variable `name`, else `fallback`, else empty.
fn env_default(params: &DefaultParams) -> String {
    let from_env = params
        .get("name")
        .and_then(JsonValue::as_str)
        .and_then(|name| env::var(name).ok())
        .filter(|value| !value.is_empty());
    match from_env {
        Some(value) => value,
        None => params.get("fallback").map(scalar_text).unwrap_or_default(),
    }
}

/// `concat`: `parts` joined with `separator` (default none).
fn concat_default(params: &DefaultParams) -> String {
    let separator = params
        .get("separator")
        .and_then(JsonValue::as_str)
        .unwrap_or_default();
    params
        .get("parts")
        .and_then(JsonValue::as_array)
        .map(|parts| {
            parts
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(separator)
        })
        .unwrap_or_default()
}

fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
