//! In-memory message catalogs.

use argcheck_core::{MessageKey, MessageTable, requires};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A localized set of message templates.
///
/// Templates are keyed by the kebab-case name of a [`MessageKey`]. Keys are
/// kept as plain strings so that a catalog written for a newer or older
/// release still loads; [`crate::lint`] reports the ones it does not know.
///
/// # Example
///
/// ```rust
/// use argcheck_core::{MessageKey, MessageTable, requires};
/// use argcheck_messages::MessageCatalog;
///
/// let catalog = MessageCatalog::new("fr")
///     .unwrap()
///     .with_message(MessageKey::ArgumentNull, "La valeur ne peut pas être nulle.");
///
/// let err = requires::not_null::<str>(None, "nom").unwrap_err();
/// assert_eq!(
///     err.localized(&catalog),
///     "La valeur ne peut pas être nulle. (Parameter 'nom')"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Language tag, e.g. "en", "pt-BR"
    pub locale: String,

    /// Templates by key name
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    /// Argument-free templates by key name, used when an error names no parameter
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unnamed: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Creates an empty catalog for `locale`.
    ///
    /// # Errors
    ///
    /// Fails when `locale` is empty or whitespace.
    pub fn new(locale: &str) -> argcheck_core::Result<Self> {
        let locale = requires::not_null_or_whitespace(Some(locale), "locale")?;
        Ok(Self {
            locale: locale.to_string(),
            messages: BTreeMap::new(),
            unnamed: BTreeMap::new(),
        })
    }

    /// Sets the template for `key`.
    pub fn with_message(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.messages.insert(key.as_str().to_string(), template.into());
        self
    }

    /// Sets the template for `key` used when no parameter name is known.
    pub fn with_unnamed_message(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.unnamed.insert(key.as_str().to_string(), template.into());
        self
    }

    /// Template for `key`, if the catalog has one.
    pub fn get(&self, key: MessageKey) -> Option<&str> {
        self.messages.get(key.as_str()).map(String::as_str)
    }

    /// Argument-free template for `key`, if the catalog has one.
    pub fn get_unnamed(&self, key: MessageKey) -> Option<&str> {
        self.unnamed.get(key.as_str()).map(String::as_str)
    }

    /// Known keys the catalog does not translate.
    pub fn missing_keys(&self) -> impl Iterator<Item = MessageKey> + '_ {
        MessageKey::ALL
            .into_iter()
            .filter(|key| !self.messages.contains_key(key.as_str()))
    }

    /// Entries whose key names no [`MessageKey`], in either section.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages
            .keys()
            .chain(self.unnamed.keys())
            .map(String::as_str)
            .filter(|name| name.parse::<MessageKey>().is_err())
    }

    /// Number of templates in the catalog, both sections counted.
    pub fn len(&self) -> usize {
        self.messages.len() + self.unnamed.len()
    }

    /// Returns true if the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MessageTable for MessageCatalog {
    fn template(&self, key: MessageKey) -> Option<&str> {
        self.get(key)
    }

    fn unnamed_template(&self, key: MessageKey) -> Option<&str> {
        self.get_unnamed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argcheck_core::ArgumentErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_blank_locale() {
        let err = MessageCatalog::new("  ").unwrap_err();
        assert_eq!(err.kind(), ArgumentErrorKind::Whitespace);
        assert_eq!(err.param_name(), Some("locale"));

        let err = MessageCatalog::new("").unwrap_err();
        assert_eq!(err.kind(), ArgumentErrorKind::Empty);
    }

    #[test]
    fn test_get_and_missing_keys() {
        let catalog = MessageCatalog::new("de")
            .unwrap()
            .with_message(MessageKey::OutOfRange, "Außerhalb des gültigen Bereichs.");

        assert_eq!(
            catalog.get(MessageKey::OutOfRange),
            Some("Außerhalb des gültigen Bereichs.")
        );
        assert_eq!(catalog.get(MessageKey::Whitespace), None);
        assert_eq!(catalog.missing_keys().count(), MessageKey::ALL.len() - 1);
        assert!(!catalog.missing_keys().any(|key| key == MessageKey::OutOfRange));
    }

    #[test]
    fn test_unknown_keys() {
        let mut catalog = MessageCatalog::new("de").unwrap();
        catalog
            .messages
            .insert("argument-nul".to_string(), "Tippfehler".to_string());
        assert_eq!(catalog.unknown_keys().collect::<Vec<_>>(), vec!["argument-nul"]);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_unnamed_section() {
        let catalog = MessageCatalog::new("es")
            .unwrap()
            .with_message(MessageKey::NullElement, "'{0}' no puede contener un elemento nulo.")
            .with_unnamed_message(MessageKey::NullElement, "La secuencia contiene un elemento nulo.");
        assert_eq!(catalog.len(), 2);

        let holes: &[Option<u8>] = &[None];
        let named = requires::not_null_empty_or_null_elements(Some(holes), "filas").unwrap_err();
        assert_eq!(
            named.localized(&catalog),
            "'filas' no puede contener un elemento nulo. (Parameter 'filas')"
        );

        let unnamed = requires::not_null_empty_or_null_elements(Some(holes), "").unwrap_err();
        assert_eq!(unnamed.localized(&catalog), "La secuencia contiene un elemento nulo.");

        let empty: &[u8] = &[];
        let unnamed = requires::not_null_or_empty_seq(Some(empty), "").unwrap_err();
        assert_eq!(
            unnamed.localized(&catalog),
            "The sequence must contain at least one element."
        );
    }

    #[test]
    fn test_catalog_as_message_table() {
        let catalog = MessageCatalog::new("es")
            .unwrap()
            .with_message(MessageKey::EmptySequence, "'{0}' debe contener al menos un elemento.");

        let empty: Vec<u8> = Vec::new();
        let err = requires::not_null_or_empty_seq(Some(&empty), "datos").unwrap_err();
        assert_eq!(
            err.localized(&catalog),
            "'datos' debe contener al menos un elemento. (Parameter 'datos')"
        );
    }
}
