use anyhow::{Context, Result, bail};
use argcheck_messages::{lint, parse_file};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(catalog_path: &str, format: &str) -> Result<()> {
    info!("Checking message catalog: {}", catalog_path);

    // Parse the catalog file
    let path = Path::new(catalog_path);
    let catalog = parse_file(path)
        .with_context(|| format!("Failed to parse catalog file: {}", catalog_path))?;

    if format != "json" {
        output::print_info(&format!(
            "Catalog loaded: {} ({} templates)",
            catalog.locale,
            catalog.len()
        ));
    }

    let report = lint(&catalog);
    output::print_lint_report(&catalog, &report, format);

    if !report.passed() {
        bail!(
            "Catalog '{}' has {} lint error(s)",
            catalog.locale,
            report.errors.len()
        );
    }

    if format != "json" {
        output::print_success("Catalog is valid");
    }

    Ok(())
}
