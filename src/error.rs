//! Error types for scrutiny.
//!
//! Two closed error types cover the engine's own failure modes, while checks
//! themselves fail through the open [`CheckError`](crate::check::CheckError)
//! channel so user-authored checks can surface any error type they like.

use thiserror::Error;

/// The canonical semantic-failure signal raised by every primitive and
/// composite check: the value did not satisfy a rule.
///
/// User checks may raise it too, or any other error type; the engine never
/// rewraps or reclassifies, so callers can tell a failed validation from a
/// malfunctioning check by downcasting the returned error:
///
/// ```
/// use scrutiny::{Scrutiny, Value, ValidationError};
///
/// futures::executor::block_on(async {
///     let engine = Scrutiny::new();
///     let check = engine.check("string").unwrap();
///     let err = engine.validate(&Value::Null, &[check]).await.unwrap_err();
///     assert!(err.downcast_ref::<ValidationError>().is_some());
/// });
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error from a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised synchronously by [`Scrutiny::register`](crate::Scrutiny::register),
/// always before any registry mutation.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Malformed registration input, e.g. a blank check name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The name is already taken in this engine's registry.
    #[error("check \"{0}\" already exists")]
    DuplicateCheck(String),
}
