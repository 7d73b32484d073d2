//! Source normalizers: one pure mapping per upstream diagnostic format
//!
//! Each normalizer turns an engine-specific diagnostic into a
//! [`NormalizedDiagnostic`](crate::NormalizedDiagnostic). Missing optional
//! input never fails; only the language-server path, which has to read the
//! referenced file, can return an error.

pub mod eslint;
pub mod lsp;
pub mod typescript;

use std::path::PathBuf;
use thiserror::Error;

pub use eslint::{normalize_eslint_diagnostic, normalize_eslint_results, EslintLintResult, EslintMessage};
pub use lsp::{
    normalize_lsp_diagnostic, normalize_publish_diagnostic_params, uri_to_abs_path, LspDiagnostic,
    PublishDiagnosticsParams,
};
pub use typescript::{
    flatten_message_text, normalize_ts_diagnostic, normalize_vue_tsc_diagnostic, TsDiagnostic,
    TsMessageChain, TsMessageText, TsSourceFile,
};

/// Error types for normalization
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a file URI: {0}")]
    InvalidUri(String),
}
