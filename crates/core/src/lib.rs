//! Checkframe Core - Diagnostic Normalization Pipeline
//!
//! This crate turns diagnostics from heterogeneous checkers into one model:
//! - Canonical 1-based locations and a four-valued level taxonomy
//! - Code frames around a location, color-decorated and stripped
//! - Normalizers for type-checker, language-server and linter output
//! - Level filtering and per-checker summary lines

pub mod config;
pub mod diagnostic;
pub mod filter;
pub mod frame;
pub mod level;
pub mod location;
pub mod normalize;
pub mod summary;

pub use config::CheckframeConfig;
pub use diagnostic::{Checker, NormalizedDiagnostic, Stack};
pub use filter::LevelFilter;
pub use frame::{create_frame, strip_ansi, CodeFrame};
pub use level::{DiagnosticLevel, ParseLevelError};
pub use location::{
    line_and_character_of_position, lsp_range_to_location, ts_location_to_location,
    LineAndCharacter, LspRange, Position, SourceLocation,
};
pub use normalize::NormalizeError;
pub use summary::{compose_checker_summary, wrap_checker_summary, CheckerSummary, DiagnosticCounts};

/// Checkframe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Platform line separator used to join frames and reports
#[cfg(windows)]
pub const EOL: &str = "\r\n";
/// Platform line separator used to join frames and reports
#[cfg(not(windows))]
pub const EOL: &str = "\n";
