//! Terminal output formatting

use checkframe_core::{Checker, DiagnosticLevel, NormalizedDiagnostic, EOL};
use colored::{ColoredString, Colorize};

fn label(text: &str) -> ColoredString {
    text.black().bold()
}

/// Render one diagnostic as a terminal report block.
///
/// ```text
///  ERROR(TypeScript)  Type 'number' is not assignable to type 'string'.
///  FILE  /app/src/main.ts:2:7
///
///   > 2 | const count: string = 1
///       |       ^^^^^
/// ```
///
/// Absent parts (file line, frame, conclusion) are left out of the join.
/// Unclassified diagnostics are labelled as errors.
pub fn diagnostic_to_terminal_log(d: &NormalizedDiagnostic, name: Option<Checker>) -> String {
    let name_in_label = name.map(|n| format!("({})", n)).unwrap_or_default();

    let level_label = match d.level.unwrap_or(DiagnosticLevel::Error) {
        DiagnosticLevel::Error => label(&format!(" ERROR{} ", name_in_label)).on_bright_red(),
        DiagnosticLevel::Warning => {
            label(&format!(" WARNING{} ", name_in_label)).on_bright_yellow()
        }
        DiagnosticLevel::Suggestion => {
            label(&format!(" SUGGESTION{} ", name_in_label)).on_bright_blue()
        }
        DiagnosticLevel::Message => {
            label(&format!(" MESSAGE{} ", name_in_label)).on_bright_cyan()
        }
    };

    let mut parts: Vec<String> = Vec::with_capacity(4);
    parts.push(format!(
        "{} {}",
        level_label,
        d.message.as_deref().unwrap_or_default()
    ));

    if d.id.is_some() || d.loc.is_some() {
        let position = d
            .loc
            .map(|loc| {
                format!(
                    ":{}:{}",
                    loc.start.line.to_string().yellow(),
                    loc.start.column.to_string().yellow()
                )
            })
            .unwrap_or_default();
        parts.push(format!(
            "{} {}{}{}",
            label(" FILE ").on_bright_cyan(),
            d.id.as_deref().unwrap_or_default(),
            position,
            EOL
        ));
    }

    if let Some(frame) = d.code_frame.as_deref().filter(|f| !f.is_empty()) {
        parts.push(format!("{}{}", frame, EOL));
    }

    if !d.conclusion.is_empty() {
        parts.push(d.conclusion.clone());
    }

    parts.join(EOL)
}
