//! Localized message catalogs for argcheck diagnostics.
//!
//! A catalog maps message keys to templates for one locale and can stand in
//! for the built-in English table wherever a [`argcheck_core::MessageTable`] is
//! accepted. Catalogs are read from YAML, TOML or JSON files.
//!
//! # Example
//!
//! ```rust
//! use argcheck_core::{MessageKey, requires};
//! use argcheck_messages::parse_yaml;
//!
//! let yaml = r#"
//! locale: fr
//! messages:
//!   empty-string: "'{0}' ne peut pas être vide."
//! "#;
//!
//! let catalog = parse_yaml(yaml).expect("Failed to parse catalog");
//! assert_eq!(catalog.get(MessageKey::EmptyString), Some("'{0}' ne peut pas être vide."));
//!
//! let err = requires::not_null_or_empty(Some(""), "nom").unwrap_err();
//! assert_eq!(err.localized(&catalog), "'nom' ne peut pas être vide. (Parameter 'nom')");
//! ```

mod catalog;
mod lint;

pub use catalog::*;
pub use lint::*;

use argcheck_core::{ArgumentError, requires};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The catalog parsed but carries an unusable value
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] ArgumentError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

fn checked(catalog: MessageCatalog) -> Result<MessageCatalog> {
    requires::not_null_or_whitespace(Some(catalog.locale.as_str()), "locale")?;
    debug!(
        "Loaded catalog '{}' with {} template(s)",
        catalog.locale,
        catalog.len()
    );
    Ok(catalog)
}

/// Parse a catalog from a YAML string.
pub fn parse_yaml(content: &str) -> Result<MessageCatalog> {
    let catalog: MessageCatalog = serde_yaml_ng::from_str(content)?;
    checked(catalog)
}

/// Parse a catalog from a TOML string.
///
/// # Example
///
/// ```rust
/// use argcheck_messages::parse_toml;
///
/// let toml = r#"
/// locale = "de"
///
/// [messages]
/// argument-null = "Der Wert darf nicht null sein."
/// "#;
///
/// let catalog = parse_toml(toml).unwrap();
/// assert_eq!(catalog.locale, "de");
/// ```
pub fn parse_toml(content: &str) -> Result<MessageCatalog> {
    let catalog: MessageCatalog =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    checked(catalog)
}

/// Parse a catalog from a JSON string.
pub fn parse_json(content: &str) -> Result<MessageCatalog> {
    let catalog: MessageCatalog = serde_json::from_str(content)?;
    checked(catalog)
}

/// Detect the catalog format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `CatalogFormat::Yaml`
/// * `.toml` → `CatalogFormat::Toml`
/// * `.json` → `CatalogFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<CatalogFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(CatalogFormat::Yaml),
        "toml" => Ok(CatalogFormat::Toml),
        "json" => Ok(CatalogFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a catalog from a file with automatic format detection.
///
/// ```no_run
/// use argcheck_messages::parse_file;
/// use std::path::Path;
///
/// let catalog = parse_file(Path::new("locales/fr.yml")).unwrap();
/// println!("Loaded {} templates for {}", catalog.len(), catalog.locale);
/// ```
pub fn parse_file(path: &Path) -> Result<MessageCatalog> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        CatalogFormat::Yaml => parse_yaml(&content),
        CatalogFormat::Toml => parse_toml(&content),
        CatalogFormat::Json => parse_json(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argcheck_core::{ArgumentErrorKind, MessageKey};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_valid_yaml() {
        let yaml = r#"
locale: pt-BR
messages:
  argument-null: "O valor não pode ser nulo."
  null-element: "'{0}' não pode conter um elemento nulo."
"#;

        let catalog = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(catalog.locale, "pt-BR");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(MessageKey::ArgumentNull),
            Some("O valor não pode ser nulo.")
        );
        assert_eq!(catalog.get(MessageKey::OutOfRange), None);
    }

    #[test]
    fn test_parse_yaml_without_messages() {
        let catalog = parse_yaml("locale: en\n").expect("messages default to empty");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_yaml_blank_locale() {
        let result = parse_yaml("locale: \"\"\nmessages: {}\n");
        match result {
            Err(ParserError::InvalidCatalog(err)) => {
                assert_eq!(err.kind(), ArgumentErrorKind::Empty);
                assert_eq!(err.param_name(), Some("locale"));
            }
            other => panic!("expected InvalidCatalog, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_yaml("locale: [unterminated");
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
locale = "nl"

[messages]
out-of-range = "Opgegeven argument valt buiten het bereik."
"#;

        let catalog = parse_toml(toml).expect("Failed to parse valid TOML");
        assert_eq!(catalog.locale, "nl");
        assert_eq!(
            catalog.get(MessageKey::OutOfRange),
            Some("Opgegeven argument valt buiten het bereik.")
        );
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
locale = "nl"
[[[invalid syntax
"#;

        let result = parse_toml(invalid_toml);
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"locale": "sv", "messages": {"empty-id": "'{0}' får inte vara tomt."}}"#;
        let catalog = parse_json(json).expect("Failed to parse valid JSON");
        assert_eq!(catalog.get(MessageKey::EmptyId), Some("'{0}' får inte vara tomt."));
    }

    #[test]
    fn test_parse_json_missing_locale() {
        let result = parse_json(r#"{"messages": {}}"#);
        assert!(matches!(result.unwrap_err(), ParserError::JsonError(_)));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("fr.yaml")).unwrap(), CatalogFormat::Yaml);
        assert_eq!(detect_format(Path::new("fr.YML")).unwrap(), CatalogFormat::Yaml);
        assert_eq!(detect_format(Path::new("fr.toml")).unwrap(), CatalogFormat::Toml);
        assert_eq!(detect_format(Path::new("fr.json")).unwrap(), CatalogFormat::Json);
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("fr.po"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(ext) if ext == "po"
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("catalog"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_file_toml() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        writeln!(file, "locale = \"fi\"\n\n[messages]\nwhitespace = \"'{{0}}' on tyhjä.\"")
            .expect("Failed to write catalog");

        let catalog = parse_file(file.path()).expect("Failed to parse catalog file");
        assert_eq!(catalog.locale, "fi");
        assert_eq!(catalog.get(MessageKey::Whitespace), Some("'{0}' on tyhjä."));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("does/not/exist.yml"));
        assert!(matches!(result.unwrap_err(), ParserError::IoError(_)));
    }

    #[test]
    fn test_round_trip_yaml() {
        let original = MessageCatalog::new("pl")
            .unwrap()
            .with_message(MessageKey::InvalidArgument, "Nieprawidłowa wartość.")
            .with_message(MessageKey::EmptySequence, "'{0}' musi zawierać co najmniej jeden element.");

        let yaml = serde_yaml_ng::to_string(&original).expect("Failed to serialize");
        let parsed = parse_yaml(&yaml).expect("Failed to parse");

        assert_eq!(parsed, original);
    }
}
