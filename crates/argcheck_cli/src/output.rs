use argcheck_core::MessageKey;
use argcheck_messages::{LintReport, MessageCatalog};
use colored::*;
use serde_json::json;

pub fn print_lint_report(catalog: &MessageCatalog, report: &LintReport, format: &str) {
    match format {
        "json" => print_json_report(catalog, report),
        _ => print_text_report(catalog, report),
    }
}

fn print_text_report(catalog: &MessageCatalog, report: &LintReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", format!("  CATALOG LINT: {}", catalog.locale).bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!("\n{} {}", "✓".green().bold(), "Lint PASSED".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Lint FAILED".red().bold());
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.to_string().red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.to_string().yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Templates:      {}", catalog.len());
    println!("  Total errors:   {}", report.errors.len());
    println!("  Total warnings: {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(catalog: &MessageCatalog, report: &LintReport) {
    let output = json!({
        "locale": catalog.locale,
        "passed": report.passed(),
        "errors": report.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        "warnings": report.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        "summary": {
            "templates": catalog.len(),
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
        }
    });

    println!("{output:#}");
}

pub fn print_keys(format: &str) {
    match format {
        "json" => {
            let keys: Vec<_> = MessageKey::ALL
                .into_iter()
                .map(|key| {
                    json!({
                        "key": key,
                        "arity": key.arity(),
                        "template": key.default_template(),
                    })
                })
                .collect();
            println!("{:#}", json!(keys));
        }
        _ => {
            for key in MessageKey::ALL {
                println!(
                    "{:<18} {}  {}",
                    key.as_str().bold(),
                    format!("({})", key.arity()).dimmed(),
                    key.default_template()
                );
            }
        }
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
