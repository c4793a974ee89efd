//! Error types for argument checks and internal invariants.
//!
//! Two tiers are kept deliberately apart:
//!
//! - [`ArgumentError`] is raised by [`crate::requires`] when a caller passes an
//!   invalid value. Callers are expected to handle or surface it.
//! - [`InternalError`] is raised by [`crate::assumes`] when the library breaks
//!   one of its own guarantees. It is not meant to be handled; let it propagate
//!   to whatever reports crashes.

use crate::messages::{DefaultMessages, MessageKey, MessageTable, render, render_unnamed};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Boxed error used as the nested cause of a violation.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result type for argument checks.
pub type Result<T, E = ArgumentError> = std::result::Result<T, E>;

/// The sub-condition an argument check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentErrorKind {
    /// A required value was absent.
    Null,

    /// The value was present but structurally empty.
    Empty,

    /// The text was non-empty but consisted only of whitespace.
    Whitespace,

    /// A sequence contained an absent element.
    NullElement,

    /// The value failed a range predicate.
    OutOfRange,

    /// A caller-supplied precondition did not hold.
    Invalid,
}

impl ArgumentErrorKind {
    /// Stable snake_case name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Empty => "empty",
            Self::Whitespace => "whitespace",
            Self::NullElement => "null_element",
            Self::OutOfRange => "out_of_range",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ArgumentErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller passed an argument that violates the callee's contract.
///
/// The rendered message is followed by ` (Parameter '<name>')` when a
/// parameter name was supplied.
///
/// # Example
///
/// ```rust
/// use argcheck_core::{ArgumentErrorKind, requires};
///
/// let err = requires::not_null_or_empty(Some(""), "path").unwrap_err();
/// assert_eq!(err.kind(), ArgumentErrorKind::Empty);
/// assert_eq!(err.param_name(), Some("path"));
/// assert!(err.to_string().ends_with("(Parameter 'path')"));
/// ```
#[derive(Debug)]
pub struct ArgumentError {
    kind: ArgumentErrorKind,
    key: MessageKey,
    param: Option<String>,
    message: Option<String>,
    source: Option<BoxError>,
}

impl ArgumentError {
    pub(crate) fn new(kind: ArgumentErrorKind, key: MessageKey, param_name: &str) -> Self {
        Self {
            kind,
            key,
            param: (!param_name.is_empty()).then(|| param_name.to_owned()),
            message: None,
            source: None,
        }
    }

    pub(crate) fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub(crate) fn with_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }

    /// Which sub-condition failed.
    pub fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// Name of the offending parameter, if one was given.
    pub fn param_name(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// The message supplied by the caller of the check, if any.
    ///
    /// Built-in diagnostics (null, empty, whitespace, ...) return `None` here;
    /// use [`ArgumentError::message`] for the rendered text.
    pub fn custom_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Template key of the built-in message for this error.
    pub fn message_key(&self) -> MessageKey {
        self.key
    }

    /// Rendered message without the parameter suffix.
    pub fn message(&self) -> String {
        self.message_with(&DefaultMessages)
    }

    /// Renders the full diagnostic using `table` for built-in messages.
    ///
    /// Caller-supplied messages are never translated. Keys missing from
    /// `table` fall back to the built-in template.
    pub fn localized(&self, table: &dyn MessageTable) -> String {
        let mut text = self.message_with(table);
        if let Some(param) = &self.param {
            text.push_str(" (Parameter '");
            text.push_str(param);
            text.push_str("')");
        }
        text
    }

    fn message_with(&self, table: &dyn MessageTable) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => match &self.param {
                Some(param) => render(table, self.key, &[param as &dyn fmt::Display]),
                None => render_unnamed(table, self.key),
            },
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.localized(&DefaultMessages))
    }
}

impl StdError for ArgumentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// The library broke one of its own guarantees.
///
/// This signals a defect in the library, not in its caller. It deliberately
/// exposes no kind or fields to match on: do not handle it, let it reach the
/// top-level crash or telemetry handler.
#[derive(Debug)]
pub struct InternalError {
    message: String,
    source: Option<BoxError>,
}

impl InternalError {
    pub(crate) fn new(message: Option<&str>) -> Self {
        let message = match message {
            Some(message) => message.to_owned(),
            None => render(&DefaultMessages, MessageKey::InternalError, &[]),
        };
        Self {
            message,
            source: None,
        }
    }

    pub(crate) fn with_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }

    /// Diagnostic text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for InternalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// Either tier of violation, for code that runs both kinds of checks.
///
/// Only the caller-misuse side can be borrowed out; the internal side is
/// observable through [`Violation::is_internal`] alone.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Violation(Repr);

#[derive(Debug, Error)]
enum Repr {
    #[error(transparent)]
    Argument(ArgumentError),

    #[error(transparent)]
    Internal(InternalError),
}

impl Violation {
    /// True when the violation is a library defect rather than caller misuse.
    pub fn is_internal(&self) -> bool {
        matches!(self.0, Repr::Internal(_))
    }

    /// The caller-misuse error, if that is what this is.
    pub fn as_argument(&self) -> Option<&ArgumentError> {
        match &self.0 {
            Repr::Argument(err) => Some(err),
            Repr::Internal(_) => None,
        }
    }

    /// Unwraps the caller-misuse error, handing internal errors back untouched.
    pub fn into_argument(self) -> std::result::Result<ArgumentError, Self> {
        match self.0 {
            Repr::Argument(err) => Ok(err),
            repr @ Repr::Internal(_) => Err(Self(repr)),
        }
    }
}

impl From<ArgumentError> for Violation {
    fn from(err: ArgumentError) -> Self {
        Self(Repr::Argument(err))
    }
}

impl From<InternalError> for Violation {
    fn from(err: InternalError) -> Self {
        Self(Repr::Internal(err))
    }
}
