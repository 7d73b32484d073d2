//! Per-checker summary line ("Found N errors and M warnings")

use crate::diagnostic::NormalizedDiagnostic;
use crate::level::DiagnosticLevel;
use colored::{Color, Colorize};
use std::fmt;

/// Error and warning counts for one checker run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl DiagnosticCounts {
    /// Count errors and warnings; other levels are ignored
    pub fn tally(diagnostics: &[NormalizedDiagnostic]) -> Self {
        let mut counts = Self::default();
        for d in diagnostics {
            match d.level {
                Some(DiagnosticLevel::Error) => counts.errors += 1,
                Some(DiagnosticLevel::Warning) => counts.warnings += 1,
                _ => {}
            }
        }
        counts
    }
}

/// A composed summary: the plain text and the color it is shown in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerSummary {
    pub text: String,
    pub color: Color,
}

impl fmt::Display for CheckerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text.as_str().color(self.color).bold())
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, noun)
    } else {
        format!("{} {}", count, noun)
    }
}

/// Compose `"[name] Found N error(s) and M warning(s)"`.
///
/// Only counts above one are pluralized, so zero reads "0 error". The color
/// is red with any error, yellow with only warnings, green otherwise.
pub fn compose_checker_summary(
    checker_name: &str,
    error_count: usize,
    warning_count: usize,
) -> CheckerSummary {
    let text = format!(
        "[{}] Found {} and {}",
        checker_name,
        plural(error_count, "error"),
        plural(warning_count, "warning")
    );
    let color = if error_count > 0 {
        Color::Red
    } else if warning_count > 0 {
        Color::Yellow
    } else {
        Color::Green
    };
    CheckerSummary { text, color }
}

/// Prefix a summary produced by the engine itself with the checker name
pub fn wrap_checker_summary(checker_name: &str, raw_summary: &str) -> String {
    format!("[{}] {}", checker_name, raw_summary)
}
