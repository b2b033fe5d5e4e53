//! The check contract.
//!
//! A check is a predicate over one [`Value`]. Three call disciplines exist in
//! the wild: finish synchronously and pass, fail synchronously with an error,
//! or defer the verdict behind a future. The [`Check`] trait collapses all
//! three into one asynchronous contract, so the orchestrator only ever sees
//! a single settled `Result` per check.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::value::Value;

/// The open error channel out of checks. Primitive and composite checks fail
/// with [`ValidationError`](crate::ValidationError); user checks may fail with
/// anything. The box is propagated unchanged, never rewrapped.
pub type CheckError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of running one check against one value.
pub type CheckResult = Result<(), CheckError>;

/// A shared, immutable handle to a check. Registries, composites, and
/// `validate` calls all hold checks through this type.
pub type CheckRef = Arc<dyn Check>;

/// A predicate over one value, synchronous or asynchronous.
///
/// Checks must not mutate the value under test (the signature enforces it)
/// and have no required side effects, so one check may be run concurrently
/// against many values.
#[async_trait]
pub trait Check: Send + Sync {
    /// Run the check. `Ok(())` is a pass; any `Err` is a failure that
    /// short-circuits the enclosing validation.
    async fn run(&self, value: &Value) -> CheckResult;
}

struct FnCheck<F>(F);

#[async_trait]
impl<F> Check for FnCheck<F>
where
    F: Fn(&Value) -> CheckResult + Send + Sync,
{
    async fn run(&self, value: &Value) -> CheckResult {
        (self.0)(value)
    }
}

/// Wrap a synchronous predicate closure as a check.
///
/// ```
/// use scrutiny::{check_fn, ValidationError, Value};
///
/// let veggie = check_fn(|value| match value {
///     Value::String(s) if s == "potato" || s == "tomato" => Ok(()),
///     _ => Err(ValidationError::new("not a veggie").into()),
/// });
/// ```
pub fn check_fn<F>(f: F) -> CheckRef
where
    F: Fn(&Value) -> CheckResult + Send + Sync + 'static,
{
    Arc::new(FnCheck(f))
}

struct AsyncFnCheck<F>(F);

#[async_trait]
impl<F> Check for AsyncFnCheck<F>
where
    F: Fn(&Value) -> BoxFuture<'static, CheckResult> + Send + Sync,
{
    async fn run(&self, value: &Value) -> CheckResult {
        (self.0)(value).await
    }
}

/// Wrap a closure returning a boxed future as an asynchronous check.
///
/// The future must be `'static`, so the closure clones whatever it needs out
/// of the borrowed value before deferring.
pub fn async_check_fn<F>(f: F) -> CheckRef
where
    F: Fn(&Value) -> BoxFuture<'static, CheckResult> + Send + Sync + 'static,
{
    Arc::new(AsyncFnCheck(f))
}
