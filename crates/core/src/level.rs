//! Diagnostic level taxonomy shared by every checker

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical severity of a diagnostic.
///
/// Discriminants mirror the TypeScript `DiagnosticCategory` enum so that a
/// compiler category can be cast directly. No ranking beyond set membership
/// is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticLevel {
    /// Every level, in ordinal order
    pub const ALL: [DiagnosticLevel; 4] = [
        DiagnosticLevel::Warning,
        DiagnosticLevel::Error,
        DiagnosticLevel::Suggestion,
        DiagnosticLevel::Message,
    ];

    /// Cast a compiler category ordinal. Returns `None` outside `0..=3`.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Warning),
            1 => Some(Self::Error),
            2 => Some(Self::Suggestion),
            3 => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a level name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown diagnostic level: {0} (expected error, warning, suggestion or message)")]
pub struct ParseLevelError(pub String);

impl FromStr for DiagnosticLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "suggestion" => Ok(Self::Suggestion),
            "message" => Ok(Self::Message),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
