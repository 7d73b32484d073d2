//! Language-server diagnostics (`textDocument/publishDiagnostics`)

use super::NormalizeError;
use crate::diagnostic::{Checker, NormalizedDiagnostic};
use crate::frame::CodeFrame;
use crate::level::DiagnosticLevel;
use crate::location::{lsp_range_to_location, LspRange};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// One protocol diagnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LspDiagnostic {
    pub range: LspRange,
    /// 1 = Error, 2 = Warning, 3 = Information, 4 = Hint
    #[serde(default)]
    pub severity: Option<i64>,
    pub message: String,
}

/// Parameters of a `publishDiagnostics` notification for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    pub uri: String,
    #[serde(default)]
    pub diagnostics: Vec<LspDiagnostic>,
}

fn level_from_severity(severity: Option<i64>) -> DiagnosticLevel {
    match severity {
        Some(2) => DiagnosticLevel::Warning,
        Some(3) => DiagnosticLevel::Message,
        Some(4) => DiagnosticLevel::Suggestion,
        _ => DiagnosticLevel::Error,
    }
}

/// Normalize one protocol diagnostic against already-read file text.
///
/// Protocol diagnostics always carry a range, so the frame is always rendered.
pub fn normalize_lsp_diagnostic(
    diagnostic: &LspDiagnostic,
    abs_file_path: &Path,
    file_text: &str,
) -> NormalizedDiagnostic {
    let loc = lsp_range_to_location(&diagnostic.range);
    let frame = CodeFrame::render(file_text, &loc);

    NormalizedDiagnostic {
        message: Some(diagnostic.message.trim().to_string()),
        id: Some(abs_file_path.display().to_string()),
        code_frame: Some(frame.decorated),
        striped_code_frame: Some(frame.stripped),
        loc: Some(loc),
        level: Some(level_from_severity(diagnostic.severity)),
        ..NormalizedDiagnostic::new(Checker::Vls)
    }
}

/// Resolve a `file://` document URI to an absolute file-system path
pub fn uri_to_abs_path(document_uri: &str) -> Result<PathBuf, NormalizeError> {
    Url::parse(document_uri)
        .ok()
        .and_then(|url| url.to_file_path().ok())
        .ok_or_else(|| NormalizeError::InvalidUri(document_uri.to_string()))
}

/// Normalize every diagnostic of one notification, in order.
///
/// The referenced file is read exactly once. A failed read is returned to the
/// caller, which decides whether that aborts the rest of its work.
pub async fn normalize_publish_diagnostic_params(
    params: &PublishDiagnosticsParams,
) -> Result<Vec<NormalizedDiagnostic>, NormalizeError> {
    let abs_file_path = uri_to_abs_path(&params.uri)?;
    let file_text = tokio::fs::read_to_string(&abs_file_path)
        .await
        .map_err(|source| NormalizeError::FileRead {
            path: abs_file_path.clone(),
            source,
        })?;

    tracing::debug!(
        path = %abs_file_path.display(),
        count = params.diagnostics.len(),
        "normalizing language-server diagnostics"
    );

    Ok(params
        .diagnostics
        .iter()
        .map(|d| normalize_lsp_diagnostic(d, &abs_file_path, &file_text))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_mapping() {
        assert_eq!(level_from_severity(Some(1)), DiagnosticLevel::Error);
        assert_eq!(level_from_severity(Some(2)), DiagnosticLevel::Warning);
        assert_eq!(level_from_severity(Some(3)), DiagnosticLevel::Message);
        assert_eq!(level_from_severity(Some(4)), DiagnosticLevel::Suggestion);
        assert_eq!(level_from_severity(Some(9)), DiagnosticLevel::Error);
        assert_eq!(level_from_severity(None), DiagnosticLevel::Error);
    }

    #[test]
    fn non_file_uri_is_rejected() {
        assert!(matches!(
            uri_to_abs_path("https://example.com/a.vue"),
            Err(NormalizeError::InvalidUri(_))
        ));
    }
}
