//! Never-failing message template rendering.
//!
//! Templates use positional placeholders (`{0}`, `{1}`, ...). Literal braces
//! are written doubled (`{{`, `}}`). Arguments beyond the highest placeholder
//! are ignored.
//!
//! [`format_message`] sits underneath every error path in this crate, so it is
//! total: whatever the input, it returns readable text.
//!
//! 1. Interpolate the template.
//! 2. If the template is malformed, refers to a missing argument, or an
//!    argument fails to display, return the raw template followed by the
//!    argument list: `"<template> [<arg0>, <arg1>]"` (just the template when
//!    there are no arguments).
//! 3. If an argument cannot be displayed even for that, return
//!    [`UNFORMATTABLE_MESSAGE`].
//!
//! An absent template renders as [`MISSING_TEMPLATE`] in step 2.

use std::fmt::{Display, Write};
use thiserror::Error;

/// Stands in for an absent template.
pub const MISSING_TEMPLATE: &str = "<no message>";

/// Returned when not even the raw fallback can be rendered.
pub const UNFORMATTABLE_MESSAGE: &str = "<message could not be formatted>";

/// A template could not be parsed.
///
/// Offsets are byte positions of the offending brace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `{` without a matching `}`
    #[error("Unmatched '{{' at byte {0}")]
    UnmatchedOpenBrace(usize),

    /// `}` that neither closes a placeholder nor is doubled
    #[error("Unmatched '}}' at byte {0}")]
    UnmatchedCloseBrace(usize),

    /// Placeholder content is not a decimal index
    #[error("Invalid placeholder '{{{text}}}' at byte {offset}")]
    InvalidPlaceholder {
        /// Byte offset of the opening brace
        offset: usize,
        /// Text between the braces
        text: String,
    },
}

/// What a well-formed template refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateShape {
    /// Number of placeholders, counting repeats
    pub placeholders: usize,

    /// Highest index referenced
    pub max_index: Option<usize>,
}

impl TemplateShape {
    /// Minimum number of arguments needed to interpolate the template.
    pub fn required_args(&self) -> usize {
        self.max_index.map_or(0, |index| index + 1)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(usize),
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if literal_start < i {
                    segments.push(Segment::Literal(&template[literal_start..i]));
                }
                if bytes.get(i + 1) == Some(&b'{') {
                    segments.push(Segment::Literal("{"));
                    i += 2;
                } else {
                    let close = template[i + 1..]
                        .find('}')
                        .map(|pos| i + 1 + pos)
                        .ok_or(TemplateError::UnmatchedOpenBrace(i))?;
                    let inner = &template[i + 1..close];
                    let index =
                        parse_index(inner).ok_or_else(|| TemplateError::InvalidPlaceholder {
                            offset: i,
                            text: inner.to_string(),
                        })?;
                    segments.push(Segment::Placeholder(index));
                    i = close + 1;
                }
                literal_start = i;
            }
            b'}' => {
                if bytes.get(i + 1) != Some(&b'}') {
                    return Err(TemplateError::UnmatchedCloseBrace(i));
                }
                if literal_start < i {
                    segments.push(Segment::Literal(&template[literal_start..i]));
                }
                segments.push(Segment::Literal("}"));
                i += 2;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }

    Ok(segments)
}

fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses `template` and reports which arguments it refers to.
///
/// # Example
///
/// ```rust
/// use argcheck_core::{TemplateError, validate_template};
///
/// let shape = validate_template("'{0}' and '{2}'").unwrap();
/// assert_eq!(shape.required_args(), 3);
///
/// assert_eq!(validate_template("oops {"), Err(TemplateError::UnmatchedOpenBrace(5)));
/// ```
pub fn validate_template(template: &str) -> Result<TemplateShape, TemplateError> {
    let shape = parse(template)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(index) => Some(index),
            Segment::Literal(_) => None,
        })
        .fold(TemplateShape::default(), |shape, index| TemplateShape {
            placeholders: shape.placeholders + 1,
            max_index: Some(shape.max_index.map_or(index, |max| max.max(index))),
        });
    Ok(shape)
}

/// Renders `template` with positional `args`. Never fails.
///
/// # Example
///
/// ```rust
/// use argcheck_core::{MISSING_TEMPLATE, format_message};
///
/// assert_eq!(format_message(Some("'{0}' is {1}"), &[&"id", &42]), "'id' is 42");
/// assert_eq!(format_message(Some("broken {"), &[&"id"]), "broken { [id]");
/// assert_eq!(format_message(None, &[]), MISSING_TEMPLATE);
/// ```
pub fn format_message(template: Option<&str>, args: &[&dyn Display]) -> String {
    let Some(template) = template else {
        return concat_fallback(MISSING_TEMPLATE, args);
    };
    interpolate(template, args).unwrap_or_else(|| concat_fallback(template, args))
}

fn interpolate(template: &str, args: &[&dyn Display]) -> Option<String> {
    let segments = parse(template).ok()?;
    let mut out = String::with_capacity(template.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(index) => {
                let arg = args.get(index)?;
                write!(out, "{arg}").ok()?;
            }
        }
    }
    Some(out)
}

fn concat_fallback(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let mut out = String::from(template);
    out.push_str(" [");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if write!(out, "{arg}").is_err() {
            return UNFORMATTABLE_MESSAGE.to_owned();
        }
    }
    out.push(']');
    out
}
