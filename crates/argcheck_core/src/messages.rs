//! Message keys and template tables.
//!
//! Every built-in diagnostic is addressed by a [`MessageKey`]. A
//! [`MessageTable`] maps keys to templates; [`DefaultMessages`] is the
//! built-in English table and the fallback for any key another table lacks.

use crate::format::format_message;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key of a built-in message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKey {
    /// A required value was absent.
    ArgumentNull,

    /// Text was empty or started with a NUL character. `{0}`: parameter name.
    EmptyString,

    /// Text was entirely whitespace. `{0}`: parameter name.
    Whitespace,

    /// A sequence yielded no elements. `{0}`: parameter name.
    EmptySequence,

    /// A sequence contained an absent element. `{0}`: parameter name.
    NullElement,

    /// An identifier was the nil sentinel. `{0}`: parameter name.
    EmptyId,

    /// A range predicate failed.
    OutOfRange,

    /// A precondition failed without a caller-supplied message.
    InvalidArgument,

    /// The library broke one of its own guarantees.
    InternalError,
}

impl MessageKey {
    /// All keys, in declaration order.
    pub const ALL: [MessageKey; 9] = [
        MessageKey::ArgumentNull,
        MessageKey::EmptyString,
        MessageKey::Whitespace,
        MessageKey::EmptySequence,
        MessageKey::NullElement,
        MessageKey::EmptyId,
        MessageKey::OutOfRange,
        MessageKey::InvalidArgument,
        MessageKey::InternalError,
    ];

    /// Stable kebab-case name, as used in catalog files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArgumentNull => "argument-null",
            Self::EmptyString => "empty-string",
            Self::Whitespace => "whitespace",
            Self::EmptySequence => "empty-sequence",
            Self::NullElement => "null-element",
            Self::EmptyId => "empty-id",
            Self::OutOfRange => "out-of-range",
            Self::InvalidArgument => "invalid-argument",
            Self::InternalError => "internal-error",
        }
    }

    /// Number of positional arguments the template is rendered with.
    pub fn arity(self) -> usize {
        match self {
            Self::EmptyString
            | Self::Whitespace
            | Self::EmptySequence
            | Self::NullElement
            | Self::EmptyId => 1,
            Self::ArgumentNull | Self::OutOfRange | Self::InvalidArgument | Self::InternalError => 0,
        }
    }

    /// Built-in English template.
    pub fn default_template(self) -> &'static str {
        match self {
            Self::ArgumentNull => "Value cannot be null.",
            Self::EmptyString => {
                "'{0}' cannot be an empty string (\"\") or start with the null character."
            }
            Self::Whitespace => {
                "The parameter \"{0}\" cannot consist entirely of white space characters."
            }
            Self::EmptySequence => "'{0}' must contain at least one element.",
            Self::NullElement => "'{0}' cannot contain a null element.",
            Self::EmptyId => "'{0}' cannot be an empty identifier.",
            Self::OutOfRange => "Specified argument was out of the range of valid values.",
            Self::InvalidArgument => "The argument is invalid.",
            Self::InternalError => {
                "An internal error occurred. Please report this as a defect in the library."
            }
        }
    }

    /// Built-in English text for errors raised without a parameter name.
    ///
    /// Keys that take no argument share [`MessageKey::default_template`].
    pub fn unnamed_template(self) -> &'static str {
        match self {
            Self::EmptyString => {
                "The value cannot be an empty string (\"\") or start with the null character."
            }
            Self::Whitespace => "The value cannot consist entirely of white space characters.",
            Self::EmptySequence => "The sequence must contain at least one element.",
            Self::NullElement => "The sequence cannot contain a null element.",
            Self::EmptyId => "The value cannot be an empty identifier.",
            Self::ArgumentNull | Self::OutOfRange | Self::InvalidArgument | Self::InternalError => {
                self.default_template()
            }
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not name any [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown message key: {0}")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_string()))
    }
}

/// Lookup from message key to template.
///
/// Returning `None` means "not provided here"; callers fall back to
/// [`MessageKey::default_template`].
pub trait MessageTable {
    /// Template for `key`, if this table has one.
    fn template(&self, key: MessageKey) -> Option<&str>;

    /// Template for `key` when no parameter name is known. Takes no arguments.
    ///
    /// Only consulted for keys with a non-zero [`MessageKey::arity`]; the
    /// others render [`MessageTable::template`] as is.
    fn unnamed_template(&self, key: MessageKey) -> Option<&str> {
        let _ = key;
        None
    }
}

/// The built-in English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageTable for DefaultMessages {
    fn template(&self, key: MessageKey) -> Option<&str> {
        Some(key.default_template())
    }

    fn unnamed_template(&self, key: MessageKey) -> Option<&str> {
        Some(key.unnamed_template())
    }
}

/// Renders `key` from `table`, falling back to the built-in template.
pub fn render(table: &dyn MessageTable, key: MessageKey, args: &[&dyn fmt::Display]) -> String {
    let template = table
        .template(key)
        .unwrap_or_else(|| key.default_template());
    format_message(Some(template), args)
}

/// Renders `key` for an error that names no parameter.
///
/// The label is left out of the text entirely rather than substituted.
pub fn render_unnamed(table: &dyn MessageTable, key: MessageKey) -> String {
    if key.arity() == 0 {
        return render(table, key, &[]);
    }
    let template = table
        .unnamed_template(key)
        .unwrap_or_else(|| key.unnamed_template());
    format_message(Some(template), &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::validate_template;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_names_round_trip() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "no-such-key".parse::<MessageKey>().unwrap_err();
        assert_eq!(err, UnknownMessageKey("no-such-key".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_case_names() {
        for key in MessageKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_default_templates_match_arity() {
        for key in MessageKey::ALL {
            let shape = validate_template(key.default_template()).unwrap();
            assert_eq!(shape.required_args(), key.arity(), "key {key}");
        }
    }

    #[test]
    fn test_unnamed_templates_take_no_arguments() {
        for key in MessageKey::ALL {
            let template = key.unnamed_template();
            let shape = validate_template(template).unwrap();
            assert_eq!(shape.required_args(), 0, "key {key}");
            assert!(!template.contains("'value'"), "key {key}");
        }
    }

    #[test]
    fn test_render_unnamed_falls_back_to_builtin() {
        struct Partial;
        impl MessageTable for Partial {
            fn template(&self, key: MessageKey) -> Option<&str> {
                (key == MessageKey::ArgumentNull).then_some("Valeur nulle.")
            }

            fn unnamed_template(&self, key: MessageKey) -> Option<&str> {
                (key == MessageKey::NullElement).then_some("La séquence contient un élément nul.")
            }
        }

        assert_eq!(
            render_unnamed(&Partial, MessageKey::NullElement),
            "La séquence contient un élément nul."
        );
        assert_eq!(
            render_unnamed(&Partial, MessageKey::EmptySequence),
            "The sequence must contain at least one element."
        );
        assert_eq!(render_unnamed(&Partial, MessageKey::ArgumentNull), "Valeur nulle.");
    }

    #[test]
    fn test_invalid_argument_text_differs_from_out_of_range() {
        let invalid = MessageKey::InvalidArgument.default_template();
        assert_eq!(invalid, "The argument is invalid.");
        assert!(!invalid.contains("range"));
    }

    #[test]
    fn test_render_falls_back_to_default() {
        struct Sparse;
        impl MessageTable for Sparse {
            fn template(&self, key: MessageKey) -> Option<&str> {
                (key == MessageKey::EmptySequence).then_some("{0} est vide")
            }
        }

        assert_eq!(render(&Sparse, MessageKey::EmptySequence, &[&"items"]), "items est vide");
        assert_eq!(
            render(&Sparse, MessageKey::ArgumentNull, &[]),
            "Value cannot be null."
        );
    }
}
