//! Checkframe CLI library, exposed for integration tests

pub mod commands;
pub mod logger;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checkframe")]
#[command(about = "One report for type checker, linter and language-server diagnostics", long_about = None)]
#[command(version = checkframe_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print internal debug logs to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize .checkframe.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    /// Normalize dumped diagnostics and report them
    Report(ReportArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Type checker diagnostics (JSON array)
    #[arg(long, value_name = "FILE")]
    pub tsc: Vec<PathBuf>,

    /// vue-tsc diagnostics (same shape as --tsc)
    #[arg(long = "vue-tsc", value_name = "FILE")]
    pub vue_tsc: Vec<PathBuf>,

    /// ESLint `--format json` output
    #[arg(long, value_name = "FILE")]
    pub eslint: Vec<PathBuf>,

    /// Language-server publishDiagnostics params (one object or an array)
    #[arg(long, value_name = "FILE")]
    pub lsp: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Levels to report for every checker, overriding .checkframe.toml
    #[arg(long, value_delimiter = ',')]
    pub level: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Overlay,
}
