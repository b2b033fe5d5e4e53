//! The fixed catalogue of primitive checks.
//!
//! Installed into every new engine's registry at construction under fixed
//! names. All are synchronous and fail with a [`ValidationError`] naming the
//! expected kind.

use std::collections::HashMap;

use crate::check::{CheckRef, check_fn};
use crate::error::ValidationError;
use crate::value::Value;

fn primitive(matches: fn(&Value) -> bool, message: &'static str) -> CheckRef {
    check_fn(move |value| {
        if matches(value) {
            Ok(())
        } else {
            Err(ValidationError::new(message).into())
        }
    })
}

/// Populate `registry` with the primitive checks.
pub(crate) fn install(registry: &mut HashMap<String, CheckRef>) {
    registry.insert(
        "undef".to_string(),
        primitive(|v| matches!(v, Value::Undef), "not undefined"),
    );
    registry.insert(
        "string".to_string(),
        primitive(|v| matches!(v, Value::String(_)), "not a string"),
    );
    registry.insert(
        "bool".to_string(),
        primitive(|v| matches!(v, Value::Bool(_)), "not a boolean"),
    );
    // NaN is numeric in representation only.
    registry.insert(
        "number".to_string(),
        primitive(
            |v| matches!(v, Value::Number(n) if !n.is_nan()),
            "not a number",
        ),
    );
    registry.insert(
        "func".to_string(),
        primitive(|v| matches!(v, Value::Func(_)), "not a function"),
    );
    registry.insert(
        "array".to_string(),
        primitive(|v| matches!(v, Value::Array(_)), "not an array"),
    );
    registry.insert(
        "object".to_string(),
        primitive(|v| matches!(v, Value::Object(_)), "not an object"),
    );
}
