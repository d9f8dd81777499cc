//! Check command implementation.

use anyhow::{Context, Result};
use annotation_order_core::{AnnotationOrderRule, Severity, SourceUnit, WalkerOutput};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    inputs: &[PathBuf],
    format: OutputFormat,
    fail_on: Option<Severity>,
    source: &ConfigSource,
) -> Result<()> {
    let config = super::load_config(source)?;
    let rule = AnnotationOrderRule::from_config(&config)
        .context("Invalid annotation order configuration")?;

    let units = read_inputs(inputs)?;

    tracing::info!(
        "Checking {} declaration(s) in {} file(s)",
        units.iter().map(|u| u.declarations.len()).sum::<usize>(),
        units.len()
    );

    let result = rule.check_all(&units);

    super::output::print(&result, format)?;

    // Exit with error code if any violation meets the threshold
    let threshold = fail_on.unwrap_or_else(|| config.fail_on());
    if result.has_violations_at(threshold) {
        std::process::exit(1);
    }

    Ok(())
}

fn read_inputs(inputs: &[PathBuf]) -> Result<Vec<SourceUnit>> {
    if inputs.is_empty() {
        tracing::debug!("Reading walker output from stdin");
        let content =
            std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;
        let output = WalkerOutput::from_json(&content).context("Invalid walker output on stdin")?;
        return Ok(output.units);
    }

    let mut units = Vec::new();
    for path in inputs {
        let output = WalkerOutput::from_file(path)
            .with_context(|| format!("Failed to load walker output: {}", path.display()))?;
        if output.units.is_empty() {
            tracing::warn!("No source units in {}", path.display());
        }
        units.extend(output.units);
    }
    Ok(units)
}
