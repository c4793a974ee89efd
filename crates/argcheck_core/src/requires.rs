//! Preconditions on caller-supplied arguments.
//!
//! Every check returns the value it was given on success, so it can be used
//! inline:
//!
//! ```rust
//! use argcheck_core::{Result, requires};
//!
//! fn greet(name: Option<&str>) -> Result<String> {
//!     let name = requires::not_null_or_whitespace(name, "name")?;
//!     Ok(format!("hello, {name}"))
//! }
//!
//! assert_eq!(greet(Some("ada")).unwrap(), "hello, ada");
//! assert!(greet(Some("  ")).is_err());
//! ```
//!
//! Checks stop at the first failing condition, and messages are only
//! rendered once a check has failed. Pass `""` as the parameter name when
//! there is none.

use crate::error::{ArgumentError, ArgumentErrorKind, BoxError, Result};
use crate::format::format_message;
use crate::messages::MessageKey;
use std::fmt::Display;
use tracing::debug;
use uuid::Uuid;

#[cold]
fn raise(error: ArgumentError) -> ArgumentError {
    debug!(
        target: "argcheck::requires",
        kind = %error.kind(),
        param = error.param_name().unwrap_or_default(),
        "argument check failed"
    );
    error
}

fn null_error(param_name: &str) -> ArgumentError {
    raise(ArgumentError::new(
        ArgumentErrorKind::Null,
        MessageKey::ArgumentNull,
        param_name,
    ))
}

fn empty_sequence_error(param_name: &str) -> ArgumentError {
    raise(ArgumentError::new(
        ArgumentErrorKind::Empty,
        MessageKey::EmptySequence,
        param_name,
    ))
}

fn null_element_error(param_name: &str) -> ArgumentError {
    raise(ArgumentError::new(
        ArgumentErrorKind::NullElement,
        MessageKey::NullElement,
        param_name,
    ))
}

/// Empty, or starting with a NUL terminator.
fn is_sentinel_empty(text: &str) -> bool {
    text.is_empty() || text.starts_with('\0')
}

/// Requires a borrowed value to be present.
///
/// # Errors
///
/// [`ArgumentErrorKind::Null`] when `value` is `None`.
pub fn not_null<'a, T: ?Sized>(value: Option<&'a T>, param_name: &str) -> Result<&'a T> {
    value.ok_or_else(|| null_error(param_name))
}

/// Requires an owned value to be present.
///
/// The by-value counterpart of [`not_null`], for plain data that is passed
/// around by copy or move but can still be missing.
///
/// # Errors
///
/// [`ArgumentErrorKind::Null`] when `value` is `None`.
pub fn not_null_allow_structs<T>(value: Option<T>, param_name: &str) -> Result<T> {
    value.ok_or_else(|| null_error(param_name))
}

/// Requires text to be present and non-empty.
///
/// Text whose first character is `'\0'` counts as empty.
///
/// # Errors
///
/// - [`ArgumentErrorKind::Null`] when `value` is `None`
/// - [`ArgumentErrorKind::Empty`] when the text is empty or NUL-prefixed
pub fn not_null_or_empty<'a>(value: Option<&'a str>, param_name: &str) -> Result<&'a str> {
    let value = not_null(value, param_name)?;
    if is_sentinel_empty(value) {
        return Err(raise(ArgumentError::new(
            ArgumentErrorKind::Empty,
            MessageKey::EmptyString,
            param_name,
        )));
    }
    Ok(value)
}

/// Requires text to be present, non-empty and not entirely whitespace.
///
/// # Errors
///
/// - [`ArgumentErrorKind::Null`] when `value` is `None`
/// - [`ArgumentErrorKind::Empty`] when the text is empty or NUL-prefixed
/// - [`ArgumentErrorKind::Whitespace`] when every character is whitespace
pub fn not_null_or_whitespace<'a>(value: Option<&'a str>, param_name: &str) -> Result<&'a str> {
    let value = not_null_or_empty(value, param_name)?;
    if value.chars().all(char::is_whitespace) {
        return Err(raise(ArgumentError::new(
            ArgumentErrorKind::Whitespace,
            MessageKey::Whitespace,
            param_name,
        )));
    }
    Ok(value)
}

/// Requires a sequence to be present and to yield at least one element.
///
/// Only the first element is pulled.
///
/// # Errors
///
/// - [`ArgumentErrorKind::Null`] when `values` is `None`
/// - [`ArgumentErrorKind::Empty`] when the sequence yields nothing
pub fn not_null_or_empty_seq<'a, C>(values: Option<&'a C>, param_name: &str) -> Result<&'a C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    let values = not_null(values, param_name)?;
    if values.into_iter().next().is_none() {
        return Err(empty_sequence_error(param_name));
    }
    Ok(values)
}

/// Requires a sequence to be present, non-empty, and free of `None` elements.
///
/// The sequence is walked once, stopping at the first `None`.
///
/// # Errors
///
/// - [`ArgumentErrorKind::Null`] when `values` is `None`
/// - [`ArgumentErrorKind::Empty`] when the sequence yields nothing
/// - [`ArgumentErrorKind::NullElement`] when an element is `None`
pub fn not_null_empty_or_null_elements<'a, C, T>(
    values: Option<&'a C>,
    param_name: &str,
) -> Result<&'a C>
where
    C: ?Sized,
    T: 'a,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    let values = not_null(values, param_name)?;
    let mut has_elements = false;
    for element in values {
        has_elements = true;
        if element.is_none() {
            return Err(null_element_error(param_name));
        }
    }
    if !has_elements {
        return Err(empty_sequence_error(param_name));
    }
    Ok(values)
}

/// Requires a sequence, if present, to contain no `None` elements.
///
/// An absent sequence passes.
///
/// # Errors
///
/// [`ArgumentErrorKind::NullElement`] when an element is `None`.
pub fn null_or_not_null_elements<'a, C, T>(
    values: Option<&'a C>,
    param_name: &str,
) -> Result<Option<&'a C>>
where
    C: ?Sized,
    T: 'a,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    if let Some(values) = values {
        if values.into_iter().any(Option::is_none) {
            return Err(null_element_error(param_name));
        }
    }
    Ok(values)
}

/// Requires an identifier not to be the nil UUID.
///
/// # Errors
///
/// [`ArgumentErrorKind::Empty`] when `value` is all zeroes.
pub fn not_empty(value: Uuid, param_name: &str) -> Result<Uuid> {
    if value.is_nil() {
        return Err(raise(ArgumentError::new(
            ArgumentErrorKind::Empty,
            MessageKey::EmptyId,
            param_name,
        )));
    }
    Ok(value)
}

/// Requires a range condition to hold.
///
/// # Errors
///
/// [`ArgumentErrorKind::OutOfRange`] when `condition` is false, carrying
/// `message` if given.
pub fn range(condition: bool, param_name: &str, message: Option<&str>) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(fail_range(param_name, message))
}

/// Like [`range`], with a message rendered from `template` on failure.
pub fn range_fmt(
    condition: bool,
    param_name: &str,
    template: &str,
    args: &[&dyn Display],
) -> Result<()> {
    if condition {
        return Ok(());
    }
    let message = format_message(Some(template), args);
    Err(fail_range(param_name, Some(&message)))
}

/// Builds an out-of-range error unconditionally.
pub fn fail_range(param_name: &str, message: Option<&str>) -> ArgumentError {
    raise(
        ArgumentError::new(ArgumentErrorKind::OutOfRange, MessageKey::OutOfRange, param_name)
            .with_message(message.map(str::to_owned)),
    )
}

/// Builds an invalid-argument error for `param_name` unconditionally.
///
/// ```rust
/// use argcheck_core::requires;
///
/// let err = requires::fail_argument("mode", None);
/// assert_eq!(err.to_string(), "The argument is invalid. (Parameter 'mode')");
/// ```
pub fn fail_argument(param_name: &str, message: Option<&str>) -> ArgumentError {
    invalid(param_name, message.map(str::to_owned))
}

/// Requires a precondition on an argument to hold.
///
/// # Errors
///
/// [`ArgumentErrorKind::Invalid`] carrying `message` when `condition` is false.
pub fn argument(condition: bool, param_name: &str, message: &str) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(invalid(param_name, Some(message.to_owned())))
}

/// Like [`argument`], with a message rendered from `template` on failure.
///
/// # Example
///
/// ```rust
/// use argcheck_core::requires;
///
/// let len = 3;
/// let err = requires::argument_fmt(len % 2 == 0, "len", "{0} must be even, got {1}", &[&"len", &len])
///     .unwrap_err();
/// assert_eq!(err.to_string(), "len must be even, got 3 (Parameter 'len')");
/// ```
pub fn argument_fmt(
    condition: bool,
    param_name: &str,
    template: &str,
    args: &[&dyn Display],
) -> Result<()> {
    if condition {
        return Ok(());
    }
    Err(invalid(param_name, Some(format_message(Some(template), args))))
}

/// Builds an invalid-argument error unconditionally, carrying exactly `message`.
///
/// ```rust
/// use argcheck_core::{ArgumentErrorKind, requires};
///
/// let err = requires::fail(Some("unsupported mode"));
/// assert_eq!(err.kind(), ArgumentErrorKind::Invalid);
/// assert_eq!(err.custom_message(), Some("unsupported mode"));
/// ```
pub fn fail(message: Option<&str>) -> ArgumentError {
    invalid("", message.map(str::to_owned))
}

/// Like [`fail`], with the message rendered from `template`.
pub fn fail_fmt(template: &str, args: &[&dyn Display]) -> ArgumentError {
    invalid("", Some(format_message(Some(template), args)))
}

/// Builds an invalid-argument error that wraps `cause`.
pub fn fail_with_cause(
    cause: impl Into<BoxError>,
    template: &str,
    args: &[&dyn Display],
) -> ArgumentError {
    let error = ArgumentError::new(ArgumentErrorKind::Invalid, MessageKey::InvalidArgument, "")
        .with_message(Some(format_message(Some(template), args)))
        .with_source(cause.into());
    raise(error)
}

fn invalid(param_name: &str, message: Option<String>) -> ArgumentError {
    raise(
        ArgumentError::new(
            ArgumentErrorKind::Invalid,
            MessageKey::InvalidArgument,
            param_name,
        )
        .with_message(message),
    )
}
