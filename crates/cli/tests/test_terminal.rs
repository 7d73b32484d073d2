use checkframe_cli::output::terminal::diagnostic_to_terminal_log;
use checkframe_core::{
    strip_ansi, Checker, DiagnosticLevel, NormalizedDiagnostic, Position, SourceLocation, EOL,
};

fn make_diagnostic(level: Option<DiagnosticLevel>) -> NormalizedDiagnostic {
    NormalizedDiagnostic {
        message: Some("Cannot find name 'foo'.".to_string()),
        id: Some("/app/src/main.ts".to_string()),
        code_frame: Some("  > 2 | foo()".to_string()),
        striped_code_frame: Some("  > 2 | foo()".to_string()),
        loc: Some(SourceLocation::new(Position::new(2, 1), Position::new(2, 4))),
        level,
        ..NormalizedDiagnostic::new(Checker::TypeScript)
    }
}

fn render(d: &NormalizedDiagnostic, name: Option<Checker>) -> String {
    strip_ansi(&diagnostic_to_terminal_log(d, name))
}

#[test]
fn test_full_report_layout() {
    let out = render(&make_diagnostic(Some(DiagnosticLevel::Error)), Some(Checker::TypeScript));
    let expected = [
        " ERROR(TypeScript)  Cannot find name 'foo'.",
        " FILE  /app/src/main.ts:2:1",
        "",
        "  > 2 | foo()",
        "",
    ]
    .join(EOL);
    assert_eq!(out, expected);
}

#[test]
fn test_level_labels() {
    let cases = [
        (Some(DiagnosticLevel::Error), " ERROR "),
        (Some(DiagnosticLevel::Warning), " WARNING "),
        (Some(DiagnosticLevel::Suggestion), " SUGGESTION "),
        (Some(DiagnosticLevel::Message), " MESSAGE "),
        (None, " ERROR "),
    ];
    for (level, label) in cases {
        let out = render(&make_diagnostic(level), None);
        assert!(out.starts_with(label), "{:?} rendered {:?}", level, out);
    }
}

#[test]
fn test_checker_name_in_label() {
    let out = render(&make_diagnostic(Some(DiagnosticLevel::Warning)), Some(Checker::EsLint));
    assert!(out.starts_with(" WARNING(ESLint) "));
}

#[test]
fn test_position_omitted_without_location() {
    let mut d = make_diagnostic(Some(DiagnosticLevel::Error));
    d.loc = None;
    d.code_frame = None;
    let out = render(&d, None);
    assert!(out.contains(" FILE  /app/src/main.ts"));
    assert!(!out.contains("main.ts:"));
    assert!(!out.contains("foo()"));
}

#[test]
fn test_absent_parts_leave_no_gap() {
    let mut d = make_diagnostic(Some(DiagnosticLevel::Error));
    d.id = None;
    d.loc = None;
    d.code_frame = None;
    let out = render(&d, None);
    assert_eq!(out, " ERROR  Cannot find name 'foo'.");
}

#[test]
fn test_conclusion_is_last() {
    let mut d = make_diagnostic(Some(DiagnosticLevel::Error));
    d.conclusion = "See https://example.com/docs".to_string();
    let out = render(&d, None);
    assert!(out.ends_with(&format!("{}See https://example.com/docs", EOL)));
}
