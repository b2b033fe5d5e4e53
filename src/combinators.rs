//! Composite check factories.
//!
//! Higher-order checks built from existing checks: union-of-values
//! ([`one_of`]), element-wise array ([`array_of`]), element-wise object
//! ([`object_of`]), alternatives ([`one_of_type`]), and structural shape
//! ([`shape`]).
//!
//! Composites trade diagnostic detail for stable messages: inner-check
//! errors are discarded and each composite fails with its own generic
//! [`ValidationError`], never disclosing which element, property, or
//! alternative failed. Inner evaluation is sequential and short-circuits on
//! the first failure, mirroring the orchestrator's own contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::check::{Check, CheckRef, CheckResult};
use crate::error::ValidationError;
use crate::value::Value;

/// A check that passes iff the value equals one of `values`.
///
/// Membership uses [`Value`] equality: exact match, no coercion, order of
/// `values` irrelevant.
pub fn one_of(values: Vec<Value>) -> CheckRef {
    Arc::new(OneOf { values })
}

struct OneOf {
    values: Vec<Value>,
}

#[async_trait]
impl Check for OneOf {
    async fn run(&self, value: &Value) -> CheckResult {
        if self.values.iter().any(|allowed| allowed == value) {
            Ok(())
        } else {
            Err(ValidationError::new("not one of the values").into())
        }
    }
}

/// A check that passes iff the value is an array whose every element passes
/// `inner`. Elements run left-to-right with first-failure short-circuit;
/// `inner` may itself be synchronous or asynchronous.
pub fn array_of(inner: CheckRef) -> CheckRef {
    Arc::new(ArrayOf { inner })
}

struct ArrayOf {
    inner: CheckRef,
}

impl ArrayOf {
    const MESSAGE: &'static str = "not an array of items passing the check";
}

#[async_trait]
impl Check for ArrayOf {
    async fn run(&self, value: &Value) -> CheckResult {
        let Value::Array(items) = value else {
            return Err(ValidationError::new(Self::MESSAGE).into());
        };
        for item in items {
            if self.inner.run(item).await.is_err() {
                return Err(ValidationError::new(Self::MESSAGE).into());
            }
        }
        Ok(())
    }
}

/// A check that passes iff the value is an object whose every property value
/// passes `inner`, in deterministic key order with first-failure
/// short-circuit.
pub fn object_of(inner: CheckRef) -> CheckRef {
    Arc::new(ObjectOf { inner })
}

struct ObjectOf {
    inner: CheckRef,
}

impl ObjectOf {
    const MESSAGE: &'static str = "not an object of property values passing the check";
}

#[async_trait]
impl Check for ObjectOf {
    async fn run(&self, value: &Value) -> CheckResult {
        let Value::Object(props) = value else {
            return Err(ValidationError::new(Self::MESSAGE).into());
        };
        for prop in props.values() {
            if self.inner.run(prop).await.is_err() {
                return Err(ValidationError::new(Self::MESSAGE).into());
            }
        }
        Ok(())
    }
}

/// A check with OR semantics: passes iff the value passes at least one of
/// `checks`, tried in order, stopping at the first success. Per-alternative
/// errors are discarded.
pub fn one_of_type(checks: Vec<CheckRef>) -> CheckRef {
    Arc::new(OneOfType { checks })
}

struct OneOfType {
    checks: Vec<CheckRef>,
}

#[async_trait]
impl Check for OneOfType {
    async fn run(&self, value: &Value) -> CheckResult {
        for check in &self.checks {
            if check.run(value).await.is_ok() {
                return Ok(());
            }
        }
        Err(ValidationError::new("doesn't pass any of the checks").into())
    }
}

/// A structural check: the value must be an object and, for every
/// `(key, check)` entry of the descriptor in declaration order, the named
/// property must pass its check. An absent property is checked as
/// [`Value::Undef`], so a required key can only be satisfied by a check that
/// accepts undefined. Keys on the value that the descriptor does not mention
/// are ignored (open shape).
pub fn shape<K>(fields: Vec<(K, CheckRef)>) -> CheckRef
where
    K: Into<String>,
{
    Arc::new(Shape {
        fields: fields.into_iter().map(|(k, c)| (k.into(), c)).collect(),
    })
}

struct Shape {
    fields: Vec<(String, CheckRef)>,
}

impl Shape {
    const MESSAGE: &'static str = "doesn't match the shape";
}

#[async_trait]
impl Check for Shape {
    async fn run(&self, value: &Value) -> CheckResult {
        let Value::Object(props) = value else {
            return Err(ValidationError::new(Self::MESSAGE).into());
        };
        for (key, check) in &self.fields {
            let prop = props.get(key).unwrap_or(&Value::Undef);
            if check.run(prop).await.is_err() {
                return Err(ValidationError::new(Self::MESSAGE).into());
            }
        }
        Ok(())
    }
}
