//! Type-checker diagnostics (`tsc` / `vue-tsc`)

use crate::diagnostic::{Checker, NormalizedDiagnostic};
use crate::frame::CodeFrame;
use crate::level::DiagnosticLevel;
use crate::location::{line_and_character_of_position, ts_location_to_location};
use crate::EOL;
use serde::{Deserialize, Serialize};

/// The source file a compiler diagnostic points into
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsSourceFile {
    pub file_name: String,
    #[serde(default)]
    pub text: String,
}

/// One node of a nested compiler message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsMessageChain {
    pub message_text: String,
    #[serde(default)]
    pub category: i64,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub next: Vec<TsMessageChain>,
}

/// Compiler message text: a plain string or a chain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TsMessageText {
    Text(String),
    Chain(TsMessageChain),
}

/// A raw compiler diagnostic.
///
/// `start` and `length` are character offsets into `file.text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsDiagnostic {
    #[serde(default)]
    pub file: Option<TsSourceFile>,
    pub message_text: TsMessageText,
    /// Compiler `DiagnosticCategory` ordinal
    pub category: i64,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub length: Option<usize>,
}

fn flatten_chain(chain: &TsMessageChain, new_line: &str, indent: usize, out: &mut String) {
    if indent > 0 {
        out.push_str(new_line);
        out.push_str(&"  ".repeat(indent));
    }
    out.push_str(&chain.message_text);
    for next in &chain.next {
        flatten_chain(next, new_line, indent + 1, out);
    }
}

/// Flatten a possibly nested message into one string.
///
/// Each chained child starts on a new line, indented two spaces per depth.
pub fn flatten_message_text(text: &TsMessageText, new_line: &str) -> String {
    match text {
        TsMessageText::Text(s) => s.clone(),
        TsMessageText::Chain(chain) => {
            let mut out = String::new();
            flatten_chain(chain, new_line, 0, &mut out);
            out
        }
    }
}

/// Normalize a compiler diagnostic, attributed to `TypeScript`
pub fn normalize_ts_diagnostic(d: &TsDiagnostic) -> NormalizedDiagnostic {
    let message = flatten_message_text(&d.message_text, EOL);

    let loc = match (&d.file, d.start, d.length) {
        (Some(file), Some(start), Some(length)) => Some(ts_location_to_location(
            line_and_character_of_position(&file.text, start),
            line_and_character_of_position(&file.text, start.saturating_add(length)),
        )),
        _ => None,
    };

    let frame = match (&d.file, &loc) {
        (Some(file), Some(loc)) => Some(CodeFrame::render(&file.text, loc)),
        _ => None,
    };

    let level = DiagnosticLevel::from_ordinal(d.category).unwrap_or(DiagnosticLevel::Error);

    tracing::trace!(code = d.code, ?level, "normalized compiler diagnostic");

    NormalizedDiagnostic {
        message: Some(message),
        id: d.file.as_ref().map(|f| f.file_name.clone()),
        code_frame: frame.as_ref().map(|f| f.decorated.clone()),
        striped_code_frame: frame.map(|f| f.stripped),
        loc,
        level: Some(level),
        ..NormalizedDiagnostic::new(Checker::TypeScript)
    }
}

/// Same as [`normalize_ts_diagnostic`], attributed to `vue-tsc`
pub fn normalize_vue_tsc_diagnostic(d: &TsDiagnostic) -> NormalizedDiagnostic {
    normalize_ts_diagnostic(d).with_checker(Checker::VueTsc)
}
