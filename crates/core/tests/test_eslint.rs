//! Tests for the linter normalizer

use checkframe_core::normalize::{
    normalize_eslint_diagnostic, normalize_eslint_results, EslintLintResult, EslintMessage,
};
use checkframe_core::{Checker, DiagnosticLevel, Position};

const SOURCE: &str = "var unused = 1;\nconsole.log('x')\nlet a = 2\n";

fn make_message(severity: i64, rule_id: Option<&str>, message: &str) -> EslintMessage {
    EslintMessage {
        rule_id: rule_id.map(String::from),
        severity,
        message: message.to_string(),
        line: 1,
        column: 5,
        end_line: Some(1),
        end_column: Some(11),
    }
}

fn make_result(messages: Vec<EslintMessage>) -> EslintLintResult {
    EslintLintResult {
        file_path: "/app/src/index.js".to_string(),
        messages,
        source: Some(SOURCE.to_string()),
        error_count: 0,
        warning_count: 0,
    }
}

#[test]
fn test_severity_zero_is_dropped() {
    let result = make_result(vec![make_message(0, Some("no-unused-vars"), "off")]);
    assert!(normalize_eslint_diagnostic(&result).is_empty());
}

#[test]
fn test_severity_mapping() {
    let result = make_result(vec![
        make_message(1, Some("semi"), "Missing semicolon."),
        make_message(2, Some("no-unused-vars"), "'unused' is assigned a value but never used."),
    ]);
    let normalized = normalize_eslint_diagnostic(&result);

    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0].level, Some(DiagnosticLevel::Warning));
    assert_eq!(normalized[1].level, Some(DiagnosticLevel::Error));
    for d in &normalized {
        assert_eq!(d.checker, Checker::EsLint);
        assert_eq!(d.id.as_deref(), Some("/app/src/index.js"));
    }
}

#[test]
fn test_rule_id_is_appended() {
    let result = make_result(vec![make_message(2, Some("no-undef"), "'foo' is not defined.")]);
    let d = &normalize_eslint_diagnostic(&result)[0];
    assert_eq!(d.message.as_deref(), Some("'foo' is not defined. (no-undef)"));
    assert!(d.message.as_deref().unwrap().ends_with(" (no-undef)"));
}

#[test]
fn test_missing_rule_id_renders_null() {
    let result = make_result(vec![make_message(2, None, "Parsing error: Unexpected token")]);
    let d = &normalize_eslint_diagnostic(&result)[0];
    assert_eq!(d.message.as_deref(), Some("Parsing error: Unexpected token (null)"));
}

#[test]
fn test_order_is_preserved_around_dropped_messages() {
    let result = make_result(vec![
        make_message(1, Some("a"), "first"),
        make_message(0, Some("b"), "dropped"),
        make_message(2, Some("c"), "second"),
        make_message(0, Some("d"), "dropped"),
        make_message(1, Some("e"), "third"),
    ]);
    let messages: Vec<String> = normalize_eslint_diagnostic(&result)
        .into_iter()
        .filter_map(|d| d.message)
        .collect();
    assert_eq!(messages, vec!["first (a)", "second (c)", "third (e)"]);
}

#[test]
fn test_location_and_frame() {
    let result = make_result(vec![make_message(2, Some("no-unused-vars"), "unused")]);
    let d = &normalize_eslint_diagnostic(&result)[0];

    let loc = d.loc.unwrap();
    assert_eq!(loc.start, Position::new(1, 5));
    assert_eq!(loc.end, Position::new(1, 11));

    let stripped = d.striped_code_frame.as_deref().unwrap();
    assert!(stripped.contains("> 1 | var unused = 1;"));
    assert!(stripped.contains("^^^^^^"));
}

/// Missing `endLine` becomes 0, not the start line. The frame still renders
/// the surrounding lines but carries no marker.
#[test]
fn test_missing_end_line_defaults_to_zero() {
    let mut message = make_message(1, Some("semi"), "Missing semicolon.");
    message.line = 2;
    message.column = 17;
    message.end_line = None;
    message.end_column = None;

    let d = &normalize_eslint_diagnostic(&make_result(vec![message]))[0];
    let loc = d.loc.unwrap();
    assert_eq!(loc.start, Position::new(2, 17));
    assert_eq!(loc.end, Position::new(0, 17));

    let stripped = d.striped_code_frame.as_deref().unwrap();
    assert!(!stripped.contains('>'));
    assert!(!stripped.contains('^'));
}

#[test]
fn test_missing_source_renders_without_failing() {
    let mut result = make_result(vec![make_message(2, Some("semi"), "x")]);
    result.source = None;
    let normalized = normalize_eslint_diagnostic(&result);
    assert_eq!(normalized.len(), 1);
    assert!(normalized[0].striped_code_frame.is_some());
}

#[test]
fn test_normalize_json_report() {
    let json = r#"[
        {
            "filePath": "/app/a.js",
            "messages": [
                { "ruleId": "semi", "severity": 2, "message": "Missing semicolon.", "line": 1, "column": 10, "endLine": 1, "endColumn": 11, "nodeType": "Program" }
            ],
            "errorCount": 1,
            "warningCount": 0,
            "source": "let a = 1\n"
        },
        { "filePath": "/app/clean.js", "messages": [], "errorCount": 0, "warningCount": 0 },
        {
            "filePath": "/app/b.js",
            "messages": [
                { "ruleId": "eqeqeq", "severity": 1, "message": "Expected '===' and instead saw '=='.", "line": 1, "column": 7 }
            ],
            "source": "if (a == b) {}\n"
        }
    ]"#;
    let results: Vec<EslintLintResult> = serde_json::from_str(json).unwrap();
    let normalized = normalize_eslint_results(&results);

    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[0].id.as_deref(), Some("/app/a.js"));
    assert_eq!(normalized[1].id.as_deref(), Some("/app/b.js"));
    assert_eq!(normalized[1].level, Some(DiagnosticLevel::Warning));
}
