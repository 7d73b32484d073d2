//! Level filtering for normalized diagnostics

use crate::diagnostic::NormalizedDiagnostic;
use crate::level::{DiagnosticLevel, ParseLevelError};

/// The set of levels allowed through to a consumer.
///
/// Unclassified records (no level) never pass, even when every level is
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    allowed: Vec<DiagnosticLevel>,
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self {
            allowed: DiagnosticLevel::ALL.to_vec(),
        }
    }
}

impl LevelFilter {
    pub fn new(allowed: impl IntoIterator<Item = DiagnosticLevel>) -> Self {
        let mut levels: Vec<DiagnosticLevel> = Vec::new();
        for level in allowed {
            if !levels.contains(&level) {
                levels.push(level);
            }
        }
        Self { allowed: levels }
    }

    /// Build a filter from level names such as `["error", "warning"]`
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ParseLevelError> {
        let levels = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<Result<Vec<DiagnosticLevel>, _>>()?;
        Ok(Self::new(levels))
    }

    pub fn allowed(&self) -> &[DiagnosticLevel] {
        &self.allowed
    }

    pub fn allows(&self, diagnostic: &NormalizedDiagnostic) -> bool {
        diagnostic
            .level
            .is_some_and(|level| self.allowed.contains(&level))
    }

    /// Keep the allowed records, preserving their relative order
    pub fn apply(&self, diagnostics: Vec<NormalizedDiagnostic>) -> Vec<NormalizedDiagnostic> {
        diagnostics.into_iter().filter(|d| self.allows(d)).collect()
    }

    /// Single-record form: the record itself, or `None`
    pub fn apply_one(&self, diagnostic: NormalizedDiagnostic) -> Option<NormalizedDiagnostic> {
        self.allows(&diagnostic).then_some(diagnostic)
    }
}
