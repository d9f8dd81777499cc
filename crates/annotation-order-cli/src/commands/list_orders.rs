//! List orders command implementation.

use anyhow::{bail, Context, Result};
use annotation_order_core::{AnnotationOrderRule, DiagnosticKind, OrderingKind};

use crate::config_resolver::ConfigSource;

/// Runs the list-orders command.
pub fn run(kind_filter: Option<&str>, source: &ConfigSource) -> Result<()> {
    let filter = match kind_filter {
        Some(key) => match OrderingKind::from_key(key) {
            Some(kind) => Some(kind),
            None => bail!(
                "Unknown kind `{key}`, expected: class, interface, method, field, parameter"
            ),
        },
        None => None,
    };

    let config = super::load_config(source)?;
    let rule = AnnotationOrderRule::from_config(&config)
        .context("Invalid annotation order configuration")?;
    let catalog = rule.catalog();

    for kind in OrderingKind::ALL {
        if filter.is_some_and(|f| f != kind) {
            continue;
        }

        let Some(entry) = catalog.entry_for(kind) else {
            println!("[{kind}] not configured\n");
            continue;
        };

        println!("[{kind}] {} annotation(s)", entry.len());
        for (rank, name) in entry.names().iter().enumerate() {
            println!("  {rank:>3}  {name}");
        }
        if !entry.exempt_prefixes().is_empty() {
            println!("  exempt prefixes: {}", entry.exempt_prefixes().join(", "));
        }
        println!();
    }

    if filter.is_none() {
        println!("Diagnostics:\n");
        println!("{:<8} {:<30} {:<9} Description", "Code", "Name", "Severity");
        println!("{}", "-".repeat(90));
        for diagnostic in DiagnosticKind::ALL {
            println!(
                "{:<8} {:<30} {:<9} {}",
                diagnostic.code(),
                diagnostic.name(),
                rule.severity_of(diagnostic).to_string(),
                diagnostic.description()
            );
        }
    }

    Ok(())
}
