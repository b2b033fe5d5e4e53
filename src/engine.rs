//! The validation engine: per-instance check registry plus the `validate`
//! orchestrator.

use std::collections::HashMap;

use crate::check::{CheckError, CheckRef};
use crate::error::RegisterError;
use crate::primitives;
use crate::value::Value;

/// A validation engine.
///
/// Each instance exclusively owns one registry mapping check names to
/// checks; registries never leak between instances. The primitive check
/// catalogue is installed at construction, user checks are added through
/// [`register`](Scrutiny::register), and [`validate`](Scrutiny::validate)
/// runs an ordered sequence of checks against one value.
///
/// The engine is runtime-agnostic: `validate` uses no executor-specific
/// API, so it behaves identically under any async runtime or a plain
/// `block_on`.
pub struct Scrutiny {
    checks: HashMap<String, CheckRef>,
}

impl Scrutiny {
    /// Create an engine with a fresh registry pre-populated with the
    /// primitive checks (`undef`, `string`, `bool`, `number`, `func`,
    /// `array`, `object`).
    pub fn new() -> Self {
        let mut checks = HashMap::new();
        primitives::install(&mut checks);
        Self { checks }
    }

    /// Register `check` under `name` in this engine's registry.
    ///
    /// Fails with [`RegisterError::InvalidArgument`] for a blank name and
    /// with [`RegisterError::DuplicateCheck`] when the name is taken, in
    /// both cases before any registry change. Registration is monotonic:
    /// there is no way to remove or replace a check.
    pub fn register(&mut self, name: &str, check: CheckRef) -> Result<(), RegisterError> {
        if name.trim().is_empty() {
            return Err(RegisterError::InvalidArgument(
                "check name must be a non-empty identifier".to_string(),
            ));
        }
        if self.checks.contains_key(name) {
            return Err(RegisterError::DuplicateCheck(name.to_string()));
        }
        tracing::debug!(name, "registered check");
        self.checks.insert(name.to_string(), check);
        Ok(())
    }

    /// Read-only view of the registry, primitives and user registrations
    /// alike.
    pub fn checks(&self) -> &HashMap<String, CheckRef> {
        &self.checks
    }

    /// Look up a single check by name.
    pub fn check(&self, name: &str) -> Option<CheckRef> {
        self.checks.get(name).cloned()
    }

    /// Run `checks` against `value`, strictly in the given order.
    ///
    /// Each check is awaited to settlement before the next starts; no two
    /// checks of one call are ever in flight at once, which makes the
    /// short-circuit contract exact: the first failing check terminates the
    /// call and its error is returned unchanged, with later checks never
    /// invoked. No wrapping, no aggregation.
    ///
    /// When every check passes, the outcome carries the original value
    /// (cloned, never transformed). An empty sequence passes vacuously.
    ///
    /// Failures are only ever surfaced through the returned future, never
    /// as a panic, so callers have one uniform handling path regardless of
    /// whether a check failed synchronously or asynchronously. There is no
    /// cancellation beyond dropping the future.
    pub async fn validate(&self, value: &Value, checks: &[CheckRef]) -> Result<Value, CheckError> {
        for check in checks {
            if let Err(err) = check.run(value).await {
                tracing::trace!(error = %err, "check failed, short-circuiting");
                return Err(err);
            }
        }
        Ok(value.clone())
    }
}

impl Default for Scrutiny {
    fn default() -> Self {
        Self::new()
    }
}
