//! The annotation-order rule: validation results turned into violations.
//!
//! # Diagnostics
//!
//! | Code  | Name | Default |
//! |-------|------|---------|
//! | AO001 | `annotation-out-of-order` | error |
//! | AO002 | `annotation-not-configured` | info |
//! | AO003 | `declaration-kind-unsupported` | warning |

use std::collections::HashMap;

use crate::catalog::OrderingCatalog;
use crate::config::{Config, ConfigError};
use crate::declaration::{Declaration, SourceUnit};
use crate::model::AnnotationName;
use crate::types::{Label, LintResult, Location, Severity, Suggestion, Violation};
use crate::validator::{OrderValidator, Verdict};

/// The kinds of diagnostic this rule emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A recognized annotation placed after one that should follow it.
    OutOfOrder,
    /// An annotation with no configured position.
    Unranked,
    /// A declaration kind with no configured convention.
    KindUnsupported,
}

impl DiagnosticKind {
    /// All diagnostic kinds.
    pub const ALL: [Self; 3] = [Self::OutOfOrder, Self::Unranked, Self::KindUnsupported];

    /// Returns the diagnostic code (e.g., "AO001").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OutOfOrder => "AO001",
            Self::Unranked => "AO002",
            Self::KindUnsupported => "AO003",
        }
    }

    /// Returns the kebab-case name of this diagnostic.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OutOfOrder => "annotation-out-of-order",
            Self::Unranked => "annotation-not-configured",
            Self::KindUnsupported => "declaration-kind-unsupported",
        }
    }

    /// Returns a brief description of what this diagnostic reports.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::OutOfOrder => "Annotation placed before one that precedes it in the convention",
            Self::Unranked => "Annotation has no configured position for its declaration kind",
            Self::KindUnsupported => "Declaration kind has no configured annotation order",
        }
    }

    /// Returns the default severity.
    #[must_use]
    pub fn default_severity(self) -> Severity {
        match self {
            Self::OutOfOrder => Severity::Error,
            Self::Unranked => Severity::Info,
            Self::KindUnsupported => Severity::Warning,
        }
    }
}

/// Checks declarations reported by a walker against an ordering catalog.
#[derive(Debug, Clone)]
pub struct AnnotationOrderRule {
    catalog: OrderingCatalog,
    severities: HashMap<DiagnosticKind, Severity>,
}

impl AnnotationOrderRule {
    /// Creates a rule with default severities.
    #[must_use]
    pub fn new(catalog: OrderingCatalog) -> Self {
        Self {
            catalog,
            severities: HashMap::new(),
        }
    }

    /// Creates a rule from configuration: catalog plus severity overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog is malformed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut rule = Self::new(config.catalog()?);
        for kind in DiagnosticKind::ALL {
            if let Some(severity) = config.severity_for(kind.code(), kind.name()) {
                rule = rule.severity(kind, severity);
            }
        }
        Ok(rule)
    }

    /// Overrides the severity of one diagnostic kind.
    #[must_use]
    pub fn severity(mut self, kind: DiagnosticKind, severity: Severity) -> Self {
        self.severities.insert(kind, severity);
        self
    }

    /// Returns the effective severity of a diagnostic kind.
    #[must_use]
    pub fn severity_of(&self, kind: DiagnosticKind) -> Severity {
        self.severities
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_severity())
    }

    /// Returns the catalog this rule validates against.
    #[must_use]
    pub fn catalog(&self) -> &OrderingCatalog {
        &self.catalog
    }

    fn violation(&self, kind: DiagnosticKind, location: Location, message: String) -> Violation {
        Violation::new(
            kind.code(),
            kind.name(),
            self.severity_of(kind),
            location,
            message,
        )
    }

    /// Checks one declaration. Declarations without annotations are skipped.
    #[must_use]
    pub fn check_declaration(&self, unit: &SourceUnit, decl: &Declaration) -> Vec<Violation> {
        if decl.annotations.is_empty() {
            return Vec::new();
        }

        let names: Vec<String> = decl
            .annotations
            .iter()
            .map(|site| simple_name(&site.name))
            .collect();

        let result = OrderValidator::new(&self.catalog).check(decl.kind, names.as_slice());
        let mut violations = Vec::new();

        for offense in &result.unranked {
            let site = &decl.annotations[offense.index];
            violations.push(self.violation(
                DiagnosticKind::Unranked,
                site.location(&unit.path),
                format!(
                    "'{}' annotation order not configured for {}",
                    offense.name, decl.kind
                ),
            ));
        }

        match &result.verdict {
            Verdict::Valid => {}
            Verdict::KindUnsupported => {
                violations.push(self.violation(
                    DiagnosticKind::KindUnsupported,
                    decl.location(&unit.path),
                    format!("annotations on {} declarations are not supported", decl.kind),
                ));
            }
            Verdict::OutOfOrder(offense) => {
                let site = &decl.annotations[offense.index];
                let mut violation = self
                    .violation(
                        DiagnosticKind::OutOfOrder,
                        site.location(&unit.path),
                        format!("'{}' annotation out of order", offense.name),
                    )
                    .with_label(Label::new(
                        decl.location(&unit.path),
                        format!("on {}", decl.describe()),
                    ));
                if let Some(follower) = self.displaced_by(decl, &names, offense.index) {
                    violation = violation.with_suggestion(Suggestion::new(format!(
                        "place '{}' before '{follower}'",
                        offense.name
                    )));
                }
                violations.push(violation);
            }
        }

        violations
    }

    /// First annotation before `index` whose rank exceeds the annotation at `index`.
    fn displaced_by<'n>(
        &self,
        decl: &Declaration,
        names: &'n [String],
        index: usize,
    ) -> Option<&'n str> {
        let rank = self.catalog.rank_of(decl.kind, &names[index])?;
        names[..index]
            .iter()
            .map(String::as_str)
            .find(|name| {
                self.catalog
                    .rank_of(decl.kind, name)
                    .is_some_and(|r| r > rank)
            })
    }

    /// Checks every declaration in one source unit.
    #[must_use]
    pub fn check_unit(&self, unit: &SourceUnit) -> Vec<Violation> {
        unit.declarations
            .iter()
            .flat_map(|decl| self.check_declaration(unit, decl))
            .collect()
    }

    /// Checks all units, returning sorted violations and counts.
    #[must_use]
    pub fn check_all(&self, units: &[SourceUnit]) -> LintResult {
        let mut result = LintResult::new();
        for unit in units {
            tracing::debug!(
                "checking {} ({} declaration(s))",
                unit.path.display(),
                unit.declarations.len()
            );
            result.violations.extend(self.check_unit(unit));
            result.files_checked += 1;
            result.declarations_checked += unit
                .declarations
                .iter()
                .filter(|d| !d.annotations.is_empty())
                .count();
        }
        result.sort();
        result
    }
}

fn simple_name(raw: &str) -> String {
    match AnnotationName::simple(raw) {
        Ok(name) => name.into(),
        Err(e) => {
            tracing::warn!("malformed annotation name {raw:?} from walker: {e}");
            raw.trim().to_string()
        }
    }
}
