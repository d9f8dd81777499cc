//! Shared output formatting for lint results.

use std::fmt::Write as _;
use std::path::Path;

use annotation_order_core::{LintResult, Severity, ViolationDiagnostic};
use anyhow::Result;
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result, true),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => render_compact(result),
        OutputFormat::Pretty => render_pretty(result, |path| std::fs::read_to_string(path).ok()),
    };
    print!("{rendered}");
    Ok(())
}

const RESET: &str = "\x1b[0m";

fn colour_of(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[34m",
    }
}

fn summary(result: &LintResult, colour: bool) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let line = format!(
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} declaration(s) across {} file(s)",
        result.declarations_checked, result.files_checked
    );
    if !colour {
        return line;
    }
    let start = if errors > 0 {
        colour_of(Severity::Error)
    } else if warnings > 0 {
        colour_of(Severity::Warning)
    } else {
        "\x1b[32m"
    };
    format!("{start}{line}{RESET}")
}

/// Multi-line blocks per violation followed by a summary line.
fn render_text(result: &LintResult, colour: bool) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let block = if colour {
            violation.format_with_severity(format_args!(
                "{}{}{RESET}",
                colour_of(violation.severity),
                violation.severity
            ))
        } else {
            violation.format()
        };
        out.push_str(&block);
        out.push('\n');
    }
    out.push_str(&summary(result, colour));
    out.push('\n');
    out
}

fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let _ = writeln!(out, "{violation}");
    }
    out
}

/// Renders each violation against its source excerpt when the walker
/// reported a byte span and the file is readable; otherwise as text.
fn render_pretty(result: &LintResult, read_source: impl Fn(&Path) -> Option<String>) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();

    for violation in &result.violations {
        let location = &violation.location;
        let source = if location.length > 0 {
            read_source(&location.file)
                .filter(|text| location.offset + location.length <= text.len())
        } else {
            None
        };

        let rendered = source.and_then(|text| {
            let report = miette::Report::new(ViolationDiagnostic::from(violation))
                .with_source_code(NamedSource::new(location.file.display().to_string(), text));
            let mut block = String::new();
            handler.render_report(&mut block, &*report).ok().map(|()| block)
        });

        match rendered {
            Some(block) => out.push_str(&block),
            None => {
                tracing::debug!("no source excerpt for {}", location.file.display());
                out.push_str(&violation.format());
            }
        }
        out.push('\n');
    }

    out.push_str(&summary(result, false));
    out.push('\n');
    out
}
