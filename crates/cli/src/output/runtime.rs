//! Runtime payloads for a remote overlay
//!
//! Payloads only ever carry the stripped code frame; terminal escapes never
//! leave the process.

use checkframe_core::{Checker, DiagnosticLevel, NormalizedDiagnostic, Stack, EOL};
use serde::{Deserialize, Serialize};

/// Event tag of every envelope pushed to the overlay
pub const RUNTIME_EVENT: &str = "checkframe:diagnostics";

/// Flattened location: the start position plus the file it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeLocation {
    pub file: String,
    pub line: i64,
    pub column: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimePayload {
    pub message: String,
    pub stack: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
    pub checker_id: Checker,
    /// Lowercase level name (`"error"`, `"warning"`, ...), not the ordinal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<DiagnosticLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<RuntimeLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeData {
    pub checker_id: Checker,
    pub diagnostics: Vec<RuntimePayload>,
}

/// `{ "type": "custom", "event": ..., "data": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub event: String,
    pub data: RuntimeData,
}

fn flatten_stack(stack: Option<&Stack>) -> String {
    match stack {
        Some(Stack::Text(text)) => text.clone(),
        Some(Stack::Frames(frames)) => frames.join(EOL),
        None => String::new(),
    }
}

/// Project one diagnostic into its transport-safe payload
pub fn diagnostic_to_runtime_error(d: &NormalizedDiagnostic) -> RuntimePayload {
    RuntimePayload {
        message: d.message.clone().unwrap_or_default(),
        stack: flatten_stack(d.stack.as_ref()),
        id: d.id.clone(),
        frame: d.striped_code_frame.clone(),
        checker_id: d.checker,
        level: d.level,
        loc: d.loc.map(|loc| RuntimeLocation {
            file: d.id.clone().unwrap_or_default(),
            line: loc.start.line,
            column: loc.start.column,
        }),
    }
}

/// Project a sequence, one payload per diagnostic, in order
pub fn diagnostics_to_runtime_errors(diagnostics: &[NormalizedDiagnostic]) -> Vec<RuntimePayload> {
    diagnostics.iter().map(diagnostic_to_runtime_error).collect()
}

/// Wrap one checker's payloads into the envelope sent to the overlay
pub fn to_runtime_envelope(checker_id: Checker, diagnostics: Vec<RuntimePayload>) -> RuntimeEnvelope {
    RuntimeEnvelope {
        kind: "custom".to_string(),
        event: RUNTIME_EVENT.to_string(),
        data: RuntimeData {
            checker_id,
            diagnostics,
        },
    }
}
