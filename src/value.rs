//! Dynamic runtime values.
//!
//! Checks validate a [`Value`], an owned dynamic representation of the kinds
//! of data a caller may hand to the engine: the absence sentinel, null,
//! booleans, IEEE-754 numbers, strings, arrays, string-keyed objects, and
//! opaque host functions.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A host function carried inside a [`Value`].
///
/// Validation only ever asks "is this callable?", so the signature is a
/// deliberately generic variadic one and equality is identity, not behavior.
pub type FuncValue = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A runtime value under validation.
#[derive(Clone)]
pub enum Value {
    /// The absence sentinel. Distinct from `Null` and from `Number(NaN)`.
    Undef,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. `Number(NaN)` is a valid value that fails the `number` check.
    Number(f64),
    /// A textual value.
    String(String),
    /// A true ordered sequence. An object with numeric keys and a `length`
    /// property is still an object, never an array.
    Array(Vec<Value>),
    /// A string-keyed structure with deterministic (sorted) key order.
    Object(BTreeMap<String, Value>),
    /// A callable host value.
    Func(FuncValue),
}

impl Value {
    /// Build an object value from key/value entries.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wrap a host function.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Func(Arc::new(f))
    }
}

impl PartialEq for Value {
    /// Exact-match equality: structural for data variants (with IEEE-754
    /// semantics for numbers, so `NaN != NaN`), identity for functions.
    /// There is no cross-variant coercion.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undef, Value::Undef) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => f.write_str("Undef"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(props) => f.debug_tuple("Object").field(props).finish(),
            Value::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    /// Bridge decoded JSON into the validation value model. JSON has no
    /// undefined or function values, so the mapping is total.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(props) => {
                Value::Object(props.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
