//! Internal invariants.
//!
//! These checks guard conditions that only the library itself can break. A
//! failure is a library defect, reported as an [`InternalError`] and logged at
//! error level so crash reporting picks it up. Do not use them for values
//! that come from callers; that is what [`crate::requires`] is for.

use crate::error::{BoxError, InternalError};
use crate::format::format_message;
use std::fmt::Display;
use tracing::error;

type Result<T> = std::result::Result<T, InternalError>;

#[cold]
fn raise(err: InternalError) -> InternalError {
    error!(target: "argcheck::assumes", "internal invariant violated: {}", err.message());
    err
}

/// Asserts that `condition` holds.
pub fn is_true(condition: bool, message: Option<&str>) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(fail(message))
}

/// Like [`is_true`], with a message rendered from `template` on failure.
pub fn is_true_fmt(condition: bool, template: &str, args: &[&dyn Display]) -> Result<()> {
    if condition {
        return Ok(());
    }
    let message = format_message(Some(template), args);
    Err(fail(Some(&message)))
}

/// Asserts that `condition` does not hold.
pub fn is_false(condition: bool, message: Option<&str>) -> Result<()> {
    is_true(!condition, message)
}

/// Asserts that a value is present, returning it.
pub fn not_null<'a, T: ?Sized>(value: Option<&'a T>) -> Result<&'a T> {
    value.ok_or_else(|| fail(None))
}

/// Asserts that a value is absent.
pub fn is_null<T: ?Sized>(value: Option<&T>) -> Result<()> {
    is_true(value.is_none(), None)
}

/// Asserts that text is present, non-empty and not NUL-prefixed.
pub fn not_null_or_empty(value: Option<&str>) -> Result<&str> {
    let value = not_null(value)?;
    is_false(value.is_empty() || value.starts_with('\0'), None)?;
    Ok(value)
}

/// Builds an internal error unconditionally.
///
/// Without a message the built-in internal-error text is used.
///
/// ```rust
/// use argcheck_core::{MessageKey, assumes};
///
/// let err = assumes::fail(None);
/// assert_eq!(err.message(), MessageKey::InternalError.default_template());
/// ```
pub fn fail(message: Option<&str>) -> InternalError {
    raise(InternalError::new(message))
}

/// Builds an internal error that wraps `cause`.
pub fn fail_with_cause(cause: impl Into<BoxError>, message: Option<&str>) -> InternalError {
    raise(InternalError::new(message).with_source(cause.into()))
}

/// Marks a code path that must never run.
pub fn not_reachable() -> InternalError {
    fail(Some("Unreachable code was reached."))
}
