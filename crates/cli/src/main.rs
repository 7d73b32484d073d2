//! Checkframe CLI - unified diagnostic reporting

use anyhow::Result;
use checkframe_cli::commands::report::ReportExitCode;
use checkframe_cli::{commands, Cli, Commands};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    match cli.command {
        Commands::Init { path } => {
            commands::init::run(path.as_deref())?;
        }
        Commands::Report(ref args) => {
            if commands::report::run(args)? == ReportExitCode::ErrorsFound {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
