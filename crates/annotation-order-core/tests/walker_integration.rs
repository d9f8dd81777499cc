//! Integration test: walker output end-to-end through the rule.
//!
//! Uses fixture files under `tests/fixtures/` to verify that the full
//! JSON → SourceUnit → OrderValidator → Violation pipeline reports what a
//! reviewer would flag.

use annotation_order_core::{AnnotationOrderRule, Config, OrderingCatalog, Severity, WalkerOutput};
use std::path::PathBuf;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_units() -> Vec<annotation_order_core::SourceUnit> {
    let root = fixture_root().join("walker");
    let mut units = Vec::new();
    for name in ["user_controller.json", "entities.json"] {
        let output = WalkerOutput::from_file(&root.join(name)).expect("fixture should parse");
        units.extend(output.units);
    }
    units
}

fn summary(result: &annotation_order_core::LintResult) -> Vec<(String, usize, String)> {
    result
        .violations
        .iter()
        .map(|v| {
            let file = v
                .location
                .file
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            (file, v.location.line, v.code.clone())
        })
        .collect()
}

// ── Builtin conventions ──

#[test]
fn builtin_catalog_flags_expected_declarations() {
    let rule = AnnotationOrderRule::new(OrderingCatalog::builtin().expect("builtin catalog"));
    let result = rule.check_all(&load_units());

    assert_eq!(
        summary(&result),
        vec![
            ("UserController.java".to_string(), 20, "AO001".to_string()),
            ("UserController.java".to_string(), 30, "AO001".to_string()),
            ("Audited.java".to_string(), 7, "AO003".to_string()),
            ("User.java".to_string(), 8, "AO001".to_string()),
            ("User.java".to_string(), 12, "AO002".to_string()),
        ],
        "{:#?}",
        result.violations
    );
    assert_eq!(result.count_by_severity(), (3, 1, 1));
    assert_eq!(result.files_checked, 3);
    // The unannotated `email` field is not counted.
    assert_eq!(result.declarations_checked, 7);
}

#[test]
fn out_of_order_messages_name_the_annotation() {
    let rule = AnnotationOrderRule::new(OrderingCatalog::builtin().unwrap());
    let result = rule.check_all(&load_units());

    let messages: Vec<&str> = result
        .by_severity(Severity::Error)
        .into_iter()
        .map(|v| v.message.as_str())
        .collect();
    assert_eq!(
        messages,
        [
            "'PreAuthorize' annotation out of order",
            "'Valid' annotation out of order",
            "'NoArgsConstructor' annotation out of order",
        ]
    );
}

#[test]
fn enable_family_on_class_is_silent() {
    let rule = AnnotationOrderRule::new(OrderingCatalog::builtin().unwrap());
    let result = rule.check_all(&load_units());
    assert!(result
        .violations
        .iter()
        .all(|v| !v.message.contains("EnableCaching")));
}

// ── Configured conventions ──

#[test]
fn config_overrides_method_order_and_severity() {
    let config = Config::from_file(&fixture_root().join("annotation-order.toml"))
        .expect("fixture config should parse");
    let rule = AnnotationOrderRule::from_config(&config).expect("catalog should build");
    let result = rule.check_all(&load_units());

    assert_eq!(
        summary(&result),
        vec![
            ("UserController.java".to_string(), 30, "AO001".to_string()),
            ("Audited.java".to_string(), 7, "AO003".to_string()),
            ("User.java".to_string(), 8, "AO001".to_string()),
            ("User.java".to_string(), 12, "AO002".to_string()),
        ]
    );
    assert_eq!(result.count_by_severity(), (2, 2, 0));
    assert!(result.has_violations_at(config.fail_on()));
}

#[test]
fn json_report_round_trips() {
    let rule = AnnotationOrderRule::new(OrderingCatalog::builtin().unwrap());
    let result = rule.check_all(&load_units());
    let json = serde_json::to_string(&result).expect("result serializes");
    let parsed: annotation_order_core::LintResult =
        serde_json::from_str(&json).expect("result deserializes");
    assert_eq!(parsed.violations.len(), result.violations.len());
    assert_eq!(parsed.declarations_checked, 7);
}

#[test]
fn test_report_gates_on_configured_threshold() {
    let config = Config::from_file(&fixture_root().join("annotation-order.toml")).unwrap();
    let rule = AnnotationOrderRule::from_config(&config).unwrap();
    let result = rule.check_all(&load_units());

    let report = result.format_test_report(config.fail_on());
    assert!(report.contains("=== annotation-order: 4 violation(s) at warning or above ==="));
    assert!(report.contains("AO003 declaration-kind-unsupported at"));
    assert!(report.contains("Total: 2 error(s), 2 warning(s), 0 info(s) in 7 declaration(s) across 3 file(s)"));

    let errors_only = result.format_test_report(Severity::Error);
    assert!(errors_only.contains("2 violation(s) at error or above"));
    assert!(!errors_only.contains("AO002"));
}
