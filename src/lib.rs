//! scrutiny - a pluggable async value-validation engine.
//!
//! Callers register named predicate functions ("checks") on an engine
//! instance and run an ordered sequence of checks against a value. Checks
//! may settle synchronously or asynchronously; either way the outcome is a
//! single future that resolves with the original value when every check
//! passes, or with the first failing check's error, unmodified, under
//! strict left-to-right short-circuit AND semantics.
//!
//! ```
//! use scrutiny::{array_of, shape, Scrutiny, Value};
//!
//! futures::executor::block_on(async {
//!     let engine = Scrutiny::new();
//!     let hero = shape(vec![
//!         ("name", engine.check("string").unwrap()),
//!         ("enemies", array_of(engine.check("string").unwrap())),
//!     ]);
//!
//!     let flash = Value::object([
//!         ("name", Value::from("Flash")),
//!         ("enemies", Value::Array(vec![Value::from("Zoom")])),
//!     ]);
//!     assert!(engine.validate(&flash, &[hero]).await.is_ok());
//! });
//! ```

pub mod check;
pub mod combinators;
pub mod engine;
pub mod error;
mod primitives;
pub mod value;

pub use check::{Check, CheckError, CheckRef, CheckResult, async_check_fn, check_fn};
pub use combinators::{array_of, object_of, one_of, one_of_type, shape};
pub use engine::Scrutiny;
pub use error::{RegisterError, ValidationError};
pub use value::Value;
