mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "argcheck")]
#[command(version, about = "Inspect and lint argcheck message catalogs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a message catalog and lint its templates
    Check {
        /// Path to the catalog file (YAML, TOML or JSON)
        catalog: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show a message exactly as a failing check would report it
    Render {
        /// Message key, e.g. "empty-string"
        key: String,

        /// Catalog to render with (defaults to the built-in messages)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Parameter name to report (omit for an unnamed error)
        #[arg(short, long)]
        param: Option<String>,
    },

    /// List message keys with their built-in templates
    Keys {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Check { catalog, format } => commands::check::execute(&catalog, &format),

        Commands::Render {
            key,
            catalog,
            param,
        } => commands::render::execute(
            &key,
            catalog.as_deref(),
            param.as_deref().unwrap_or_default(),
        ),

        Commands::Keys { format } => commands::keys::execute(&format),
    }
}
