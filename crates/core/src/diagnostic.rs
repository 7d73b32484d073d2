//! Canonical diagnostic record produced by every normalizer

use crate::level::DiagnosticLevel;
use crate::location::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical checker a diagnostic is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Checker {
    #[serde(rename = "TypeScript")]
    TypeScript,
    #[serde(rename = "vue-tsc")]
    VueTsc,
    #[serde(rename = "VLS")]
    Vls,
    #[serde(rename = "ESLint")]
    EsLint,
}

impl Checker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Checker::TypeScript => "TypeScript",
            Checker::VueTsc => "vue-tsc",
            Checker::Vls => "VLS",
            Checker::EsLint => "ESLint",
        }
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw stack trace: either one blob or ordered frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stack {
    Text(String),
    Frames(Vec<String>),
}

/// The engine-agnostic diagnostic every consumer works with.
///
/// `code_frame` carries ANSI color escapes; `striped_code_frame` is the same
/// excerpt with every escape removed and is the only frame allowed to leave
/// the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDiagnostic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Trailing note shown after the frame
    #[serde(default)]
    pub conclusion: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,

    /// Absolute file path (or identifier) the diagnostic refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub checker: Checker,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_frame: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striped_code_frame: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,

    /// `None` means unclassified; such records never pass a filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<DiagnosticLevel>,
}

impl NormalizedDiagnostic {
    /// An empty record attributed to `checker`
    pub fn new(checker: Checker) -> Self {
        Self {
            message: None,
            conclusion: String::new(),
            stack: None,
            id: None,
            checker,
            code_frame: None,
            striped_code_frame: None,
            loc: None,
            level: None,
        }
    }

    /// Relabel the record as coming from a different logical checker
    pub fn with_checker(mut self, checker: Checker) -> Self {
        self.checker = checker;
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == Some(DiagnosticLevel::Error)
    }

    pub fn is_warning(&self) -> bool {
        self.level == Some(DiagnosticLevel::Warning)
    }
}
