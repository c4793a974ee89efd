//! Static checks for message catalogs.
//!
//! A catalog that loads can still be wrong: a template with a stray brace
//! renders through the formatter's raw fallback, and a placeholder the key
//! never supplies renders verbatim. Linting catches these before a catalog
//! ships.

use crate::MessageCatalog;
use argcheck_core::{MessageKey, TemplateError, validate_template};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, warn};

static LOCALE_TAG: LazyLock<Result<Regex, String>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").map_err(|e| e.to_string())
});

/// Language tag shape check. No tag passes if the pattern failed to compile.
fn is_locale_tag(locale: &str) -> bool {
    LOCALE_TAG
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(locale))
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintIssue {
    /// Locale is not a language tag
    #[error("Invalid locale tag '{0}'")]
    InvalidLocale(String),

    /// Entry does not name a known message key
    #[error("Unknown message key '{0}'")]
    UnknownKey(String),

    /// Template is empty or whitespace
    #[error("Template for '{0}' is blank")]
    BlankTemplate(MessageKey),

    /// Template does not parse
    #[error("Template for '{key}' is malformed: {error}")]
    MalformedTemplate {
        /// Offending key
        key: MessageKey,
        /// Parse failure
        error: TemplateError,
    },

    /// Template refers to arguments the key is never rendered with
    #[error("Template for '{key}' uses {required} argument(s) but only {arity} are supplied")]
    TooManyArguments {
        /// Offending key
        key: MessageKey,
        /// Arguments the template needs
        required: usize,
        /// Arguments the key is rendered with
        arity: usize,
    },

    /// Known key without a translation
    #[error("No template for '{0}', the built-in text will be used")]
    MissingKey(MessageKey),
}

/// Findings for one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Problems that make the catalog unusable as-is
    pub errors: Vec<LintIssue>,

    /// Gaps that fall back to built-in text
    pub warnings: Vec<LintIssue>,
}

impl LintReport {
    /// True if no errors were found.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a catalog's locale tag and every template in it.
///
/// # Example
///
/// ```rust
/// use argcheck_core::MessageKey;
/// use argcheck_messages::{LintIssue, MessageCatalog, lint};
///
/// let catalog = MessageCatalog::new("it")
///     .unwrap()
///     .with_message(MessageKey::NullElement, "'{0}' non può contenere {1}");
///
/// let report = lint(&catalog);
/// assert!(!report.passed());
/// assert_eq!(
///     report.errors,
///     vec![LintIssue::TooManyArguments {
///         key: MessageKey::NullElement,
///         required: 2,
///         arity: 1,
///     }]
/// );
/// ```
pub fn lint(catalog: &MessageCatalog) -> LintReport {
    let mut report = LintReport::default();

    if !is_locale_tag(&catalog.locale) {
        report
            .errors
            .push(LintIssue::InvalidLocale(catalog.locale.clone()));
    }

    for name in catalog.unknown_keys() {
        report.errors.push(LintIssue::UnknownKey(name.to_string()));
    }

    for key in MessageKey::ALL {
        let Some(template) = catalog.get(key) else {
            report.warnings.push(LintIssue::MissingKey(key));
            continue;
        };
        if let Some(issue) = lint_template(key, template, key.arity()) {
            report.errors.push(issue);
        }
    }

    // Unnamed templates are rendered without arguments.
    for key in MessageKey::ALL {
        let Some(template) = catalog.get_unnamed(key) else {
            continue;
        };
        if let Some(issue) = lint_template(key, template, 0) {
            report.errors.push(issue);
        }
    }

    for warning in &report.warnings {
        warn!("{}: {}", catalog.locale, warning);
    }
    debug!(
        "Linted catalog '{}': {} error(s), {} warning(s)",
        catalog.locale,
        report.errors.len(),
        report.warnings.len()
    );

    report
}

fn lint_template(key: MessageKey, template: &str, arity: usize) -> Option<LintIssue> {
    if template.trim().is_empty() {
        return Some(LintIssue::BlankTemplate(key));
    }
    match validate_template(template) {
        Err(error) => Some(LintIssue::MalformedTemplate { key, error }),
        Ok(shape) if shape.required_args() > arity => Some(LintIssue::TooManyArguments {
            key,
            required: shape.required_args(),
            arity,
        }),
        Ok(_) => None,
    }
}
