//! Tests for checker summary composition

use checkframe_core::{
    compose_checker_summary, strip_ansi, wrap_checker_summary, Checker, DiagnosticCounts,
    DiagnosticLevel, NormalizedDiagnostic,
};
use colored::Color;

#[test]
fn test_plural_errors() {
    let summary = compose_checker_summary("X", 2, 0);
    assert!(summary.text.contains("Found 2 errors and 0 warning"));
    assert_eq!(summary.color, Color::Red);
}

#[test]
fn test_singular_at_one() {
    let summary = compose_checker_summary("X", 1, 1);
    assert_eq!(summary.text, "[X] Found 1 error and 1 warning");
    assert_eq!(summary.color, Color::Red);
}

#[test]
fn test_zero_is_singular() {
    let summary = compose_checker_summary("X", 0, 0);
    assert_eq!(summary.text, "[X] Found 0 error and 0 warning");
    assert_eq!(summary.color, Color::Green);
}

#[test]
fn test_warnings_only_are_yellow() {
    let summary = compose_checker_summary("ESLint", 0, 3);
    assert_eq!(summary.text, "[ESLint] Found 0 error and 3 warnings");
    assert_eq!(summary.color, Color::Yellow);
}

#[test]
fn test_display_keeps_text() {
    let summary = compose_checker_summary("TypeScript", 4, 2);
    assert_eq!(strip_ansi(&summary.to_string()), summary.text);
}

#[test]
fn test_wrap_checker_summary() {
    assert_eq!(
        wrap_checker_summary("vue-tsc", "Found 0 errors. Watching for file changes."),
        "[vue-tsc] Found 0 errors. Watching for file changes."
    );
}

#[test]
fn test_tally_counts_errors_and_warnings_only() {
    let levels = [
        Some(DiagnosticLevel::Error),
        Some(DiagnosticLevel::Warning),
        Some(DiagnosticLevel::Error),
        Some(DiagnosticLevel::Suggestion),
        Some(DiagnosticLevel::Message),
        None,
    ];
    let diagnostics: Vec<NormalizedDiagnostic> = levels
        .into_iter()
        .map(|level| NormalizedDiagnostic {
            level,
            ..NormalizedDiagnostic::new(Checker::EsLint)
        })
        .collect();

    assert_eq!(
        DiagnosticCounts::tally(&diagnostics),
        DiagnosticCounts {
            errors: 2,
            warnings: 1
        }
    );
}
