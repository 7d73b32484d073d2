//! Linter results (`eslint --format json`)

use crate::diagnostic::{Checker, NormalizedDiagnostic};
use crate::frame::CodeFrame;
use crate::level::DiagnosticLevel;
use crate::location::{Position, SourceLocation};
use serde::{Deserialize, Serialize};

/// One lint message inside a result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintMessage {
    /// `None` for parser errors, which carry no rule
    #[serde(default)]
    pub rule_id: Option<String>,
    /// 0 = off, 1 = warn, 2 = error
    pub severity: i64,
    pub message: String,
    #[serde(default)]
    pub line: i64,
    #[serde(default)]
    pub column: i64,
    #[serde(default)]
    pub end_line: Option<i64>,
    #[serde(default)]
    pub end_column: Option<i64>,
}

/// All messages the linter produced for one file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintLintResult {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<EslintMessage>,
    /// Source text as the linter saw it
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub warning_count: usize,
}

fn level_from_severity(severity: i64) -> Option<DiagnosticLevel> {
    match severity {
        0 => None,
        1 => Some(DiagnosticLevel::Warning),
        _ => Some(DiagnosticLevel::Error),
    }
}

/// Normalize one lint result into one record per enabled message.
///
/// Severity 0 ("off") messages are dropped. A missing `endLine` becomes 0
/// rather than the start line; this matches the upstream plugin and keeps the
/// frame free of carets for such messages. A missing `endColumn` falls back
/// to the start column.
pub fn normalize_eslint_diagnostic(result: &EslintLintResult) -> Vec<NormalizedDiagnostic> {
    let source = result.source.as_deref().unwrap_or("");

    result
        .messages
        .iter()
        .filter_map(|m| {
            let level = level_from_severity(m.severity)?;
            let loc = SourceLocation::new(
                Position::new(m.line, m.column),
                Position::new(m.end_line.unwrap_or(0), m.end_column.unwrap_or(m.column)),
            );
            let frame = CodeFrame::render(source, &loc);
            let rule_id = m.rule_id.as_deref().unwrap_or("null");

            Some(NormalizedDiagnostic {
                message: Some(format!("{} ({})", m.message, rule_id)),
                id: Some(result.file_path.clone()),
                code_frame: Some(frame.decorated),
                striped_code_frame: Some(frame.stripped),
                loc: Some(loc),
                level: Some(level),
                ..NormalizedDiagnostic::new(Checker::EsLint)
            })
        })
        .collect()
}

/// Normalize a whole linter report, file by file, keeping message order
pub fn normalize_eslint_results(results: &[EslintLintResult]) -> Vec<NormalizedDiagnostic> {
    let diagnostics: Vec<NormalizedDiagnostic> =
        results.iter().flat_map(normalize_eslint_diagnostic).collect();
    tracing::debug!(
        files = results.len(),
        count = diagnostics.len(),
        "normalized lint results"
    );
    diagnostics
}
