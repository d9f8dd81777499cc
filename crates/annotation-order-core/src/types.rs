//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown severity `{other}`, expected: error, warning, info"
            )),
        }
    }
}

/// Source code location, as reported by the declaration walker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    #[serde(default)]
    pub offset: usize,
    /// Length of the span in bytes.
    #[serde(default)]
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A labeled span for additional context in violations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Location of the label.
    pub location: Location,
    /// Message for this label.
    pub message: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// A suggested fix for a violation. Always advisory; annotations are never
/// rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Diagnostic code (e.g., "AO001").
    pub code: String,
    /// Diagnostic name (e.g., "annotation-out-of-order").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Additional labels for context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
            labels: Vec::new(),
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Adds a label to this violation.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with_severity(self.severity)
    }

    /// Like [`format`](Self::format), with the severity rendered by the
    /// caller (e.g. wrapped in terminal colours).
    #[must_use]
    pub fn format_with_severity(&self, severity: impl std::fmt::Display) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {severity}: {}", self.message);
        for label in &self.labels {
            let _ = writeln!(
                output,
                "  --> {}:{}: {}",
                label.location.line, label.location.column, label.message
            );
        }
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of declarations checked.
    #[serde(default)]
    pub declarations_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Formats the violations at or above `fail_on` as a panic message for
    /// `cargo test` gates.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations
            .iter()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = format!(
            "\n=== annotation-order: {} violation(s) at {fail_on} or above ===\n\n",
            failing.len()
        );
        for v in &failing {
            let _ = writeln!(report, "{}", v.format());
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {errors} error(s), {warnings} warning(s), {infos} info(s) in {} declaration(s) across {} file(s)",
            self.declarations_checked, self.files_checked
        );
        report
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Sorts violations by file, then line, then column.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
        self.declarations_checked += other.declarations_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "AO001",
            "annotation-out-of-order",
            severity,
            Location::new(PathBuf::from("src/main/java/UserController.java"), 42, 5),
            "'Override' annotation out of order",
        )
    }

    #[test]
    fn severity_parses_lowercase() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_orders_info_below_error() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn violation_display_is_one_line() {
        let v = make_violation(Severity::Error);
        insta::assert_snapshot!(
            v.to_string(),
            @"src/main/java/UserController.java:42:5: error [AO001] 'Override' annotation out of order"
        );
    }

    #[test]
    fn violation_format_includes_suggestion_and_labels() {
        let v = make_violation(Severity::Error)
            .with_suggestion(Suggestion::new("move it before 'Deprecated'"))
            .with_label(Label::new(
                Location::new(PathBuf::from("src/main/java/UserController.java"), 44, 5),
                "on this method",
            ));
        let formatted = v.format();
        assert!(formatted.contains("  --> 44:5: on this method"));
        assert!(formatted.contains("= help: move it before 'Deprecated'"));
    }

    #[test]
    fn violation_format_omits_help_when_none() {
        let formatted = make_violation(Severity::Error).format();
        assert!(!formatted.contains("help:"));
    }

    #[test]
    fn violation_json_skips_empty_fields() {
        let json = serde_json::to_string(&make_violation(Severity::Info)).unwrap();
        assert!(!json.contains("suggestion"));
        assert!(!json.contains("labels"));
        assert!(json.contains("\"severity\":\"info\""));
    }

    #[test]
    fn diagnostic_carries_code_and_help() {
        let v = make_violation(Severity::Error).with_suggestion(Suggestion::new("reorder"));
        let diag = ViolationDiagnostic::from(&v);
        assert_eq!(
            diag.to_string(),
            "[AO001] 'Override' annotation out of order"
        );
        assert_eq!(diag.help().map(|h| h.to_string()), Some("reorder".to_string()));
    }

    #[test]
    fn format_with_severity_replaces_only_the_severity() {
        let v = make_violation(Severity::Warning);
        let plain = v.format();
        let painted = v.format_with_severity("<warning>");
        assert_eq!(plain.replace("warning:", "<warning>:"), painted);
    }

    #[test]
    fn test_report_filters_by_fail_on() {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.declarations_checked = 4;
        result.violations.push(make_violation(Severity::Info));
        result.violations.push(
            make_violation(Severity::Error)
                .with_suggestion(Suggestion::new("place 'Override' before 'Deprecated'"))
                .with_label(Label::new(
                    Location::new(PathBuf::from("src/main/java/UserController.java"), 44, 5),
                    "on method 'findUser'",
                )),
        );

        insta::assert_snapshot!(result.format_test_report(Severity::Warning).trim(), @r"
        === annotation-order: 1 violation(s) at warning or above ===

        AO001 annotation-out-of-order at src/main/java/UserController.java:42:5
          error: 'Override' annotation out of order
          --> 44:5: on method 'findUser'
          = help: place 'Override' before 'Deprecated'

        Total: 1 error(s), 0 warning(s), 1 info(s) in 4 declaration(s) across 2 file(s)
        ");

        let report = result.format_test_report(Severity::Info);
        assert!(report.contains("2 violation(s) at info or above"));
        assert!(report.contains("  info: 'Override' annotation out of order"));
    }

    #[test]
    fn has_violations_at_threshold() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_counts_each_level() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Info));
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (1, 0, 2));
        assert_eq!(result.by_severity(Severity::Info).len(), 2);
    }

    #[test]
    fn sort_orders_by_file_line_column() {
        let mut result = LintResult::new();
        let at = |file: &str, line, column| {
            let mut v = make_violation(Severity::Error);
            v.location = Location::new(PathBuf::from(file), line, column);
            v
        };
        result.violations = vec![at("b.java", 1, 1), at("a.java", 9, 3), at("a.java", 9, 1)];
        result.sort();
        let order: Vec<_> = result
            .violations
            .iter()
            .map(|v| (v.location.file.display().to_string(), v.location.column))
            .collect();
        assert_eq!(
            order,
            [
                ("a.java".to_string(), 1),
                ("a.java".to_string(), 3),
                ("b.java".to_string(), 1)
            ]
        );
    }

    #[test]
    fn extend_merges_counts() {
        let mut a = LintResult::new();
        a.files_checked = 1;
        a.declarations_checked = 3;
        let mut b = LintResult::new();
        b.files_checked = 2;
        b.declarations_checked = 4;
        b.violations.push(make_violation(Severity::Error));
        a.extend(b);
        assert_eq!(a.files_checked, 3);
        assert_eq!(a.declarations_checked, 7);
        assert_eq!(a.violations.len(), 1);
    }
}
