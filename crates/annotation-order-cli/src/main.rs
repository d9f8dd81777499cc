//! annotation-order CLI tool.
//!
//! Usage:
//! ```bash
//! annotation-order check [OPTIONS] [INPUT]...
//! annotation-order list-orders [--kind <KIND>]
//! annotation-order init
//! ```

use annotation_order_core::Severity;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Checks annotation order on declarations reported by a source walker
#[derive(Parser)]
#[command(name = "annotation-order")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check walker output for annotation order violations
    Check {
        /// Walker output JSON files (reads stdin when omitted)
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Lowest severity that fails the run (overrides config)
        #[arg(long)]
        fail_on: Option<Severity>,
    },

    /// Show the effective annotation orders
    ListOrders {
        /// Only show one kind (class, interface, method, field, parameter)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source excerpts for annotations with a reported byte span.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());

    match cli.command {
        Commands::Check {
            inputs,
            format,
            fail_on,
        } => commands::check::run(&inputs, format, fail_on, &source),
        Commands::ListOrders { kind } => commands::list_orders::run(kind.as_deref(), &source),
        Commands::Init { force } => commands::init::run(force),
    }
}
