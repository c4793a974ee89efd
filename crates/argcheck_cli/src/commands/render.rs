use anyhow::{Context, Result};
use argcheck_core::{ArgumentError, DefaultMessages, MessageKey, MessageTable, render, requires};
use argcheck_messages::parse_file;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Runs the check that reports `key` against an input it rejects.
///
/// `None` for keys no argument check produces.
fn failing_check(key: MessageKey, param: &str) -> Option<ArgumentError> {
    match key {
        MessageKey::ArgumentNull => requires::not_null::<str>(None, param).err(),
        MessageKey::EmptyString => requires::not_null_or_empty(Some(""), param).err(),
        MessageKey::Whitespace => requires::not_null_or_whitespace(Some(" "), param).err(),
        MessageKey::EmptySequence => {
            let empty: &[u8] = &[];
            requires::not_null_or_empty_seq(Some(empty), param).err()
        }
        MessageKey::NullElement => {
            let holes: &[Option<u8>] = &[None];
            requires::not_null_empty_or_null_elements(Some(holes), param).err()
        }
        MessageKey::EmptyId => requires::not_empty(Uuid::nil(), param).err(),
        MessageKey::OutOfRange => requires::range(false, param, None).err(),
        MessageKey::InvalidArgument => Some(requires::fail_argument(param, None)),
        MessageKey::InternalError => None,
    }
}

/// An empty `param` renders the message as an unnamed error would read.
pub fn execute(key: &str, catalog_path: Option<&str>, param: &str) -> Result<()> {
    let key: MessageKey = key.parse()?;

    let catalog = catalog_path
        .map(|path| {
            parse_file(Path::new(path))
                .with_context(|| format!("Failed to parse catalog file: {}", path))
        })
        .transpose()?;
    let table: &dyn MessageTable = match &catalog {
        Some(catalog) => catalog,
        None => &DefaultMessages,
    };

    let rendered = match failing_check(key, param) {
        Some(err) => {
            debug!("Rendering {} error for key {}", err.kind(), key);
            err.localized(table)
        }
        None => render(table, key, &[]),
    };

    println!("{rendered}");
    Ok(())
}
