//! Report command: normalize each checker's dump on its own worker thread
//!
//! Workers share nothing: each reads its own input, normalizes, filters and
//! projects, then hands console text and overlay envelopes to the
//! coordinator running on the calling thread.

use anyhow::{anyhow, Context, Result};
use checkframe_core::normalize::{
    normalize_eslint_results, normalize_publish_diagnostic_params, normalize_ts_diagnostic,
    normalize_vue_tsc_diagnostic, EslintLintResult, PublishDiagnosticsParams, TsDiagnostic,
};
use checkframe_core::{
    compose_checker_summary, CheckframeConfig, Checker, DiagnosticCounts, LevelFilter,
    NormalizedDiagnostic,
};
use colored::Colorize;
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::logger::{Coordinator, Logger};
use crate::output::runtime::{diagnostics_to_runtime_errors, to_runtime_envelope, RuntimeEnvelope};
use crate::output::terminal::diagnostic_to_terminal_log;
use crate::{OutputFormat, ReportArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportExitCode {
    Success,
    ErrorsFound,
}

/// One input file and the checker whose normalizer reads it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerJob {
    pub checker: Checker,
    pub input: PathBuf,
}

/// Everything a finished report produced
#[derive(Debug, Default)]
pub struct ReportOutcome {
    /// Counts of the diagnostics that passed the filters
    pub counts: DiagnosticCounts,
    /// Overlay envelopes in the order the coordinator received them
    pub envelopes: Vec<RuntimeEnvelope>,
}

impl ReportOutcome {
    pub fn exit_code(&self) -> ReportExitCode {
        if self.counts.errors > 0 {
            ReportExitCode::ErrorsFound
        } else {
            ReportExitCode::Success
        }
    }
}

/// A `publishDiagnostics` dump holds either one notification or many
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

pub fn run(args: &ReportArgs) -> Result<ReportExitCode> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = CheckframeConfig::find_and_load(&cwd)?;

    let outcome = execute(args, &config, Box::new(std::io::stdout()))?;

    if args.format == OutputFormat::Overlay && config.overlay.enabled {
        let json = serde_json::to_string_pretty(&outcome.envelopes)
            .context("serialize overlay envelopes")?;
        println!("{}", json);
    }

    Ok(outcome.exit_code())
}

/// Collect jobs in flag order: type checker, vue-tsc, linter, language server
pub fn jobs_from_args(args: &ReportArgs) -> Vec<CheckerJob> {
    let groups: [(Checker, &Vec<PathBuf>); 4] = [
        (Checker::TypeScript, &args.tsc),
        (Checker::VueTsc, &args.vue_tsc),
        (Checker::EsLint, &args.eslint),
        (Checker::Vls, &args.lsp),
    ];
    groups
        .iter()
        .flat_map(|(checker, inputs)| {
            inputs.iter().map(move |input| CheckerJob {
                checker: *checker,
                input: input.clone(),
            })
        })
        .collect()
}

/// The filter for one checker: `--level` wins over the configuration
pub fn level_filter(args: &ReportArgs, config: &CheckframeConfig, checker: Checker) -> Result<LevelFilter> {
    match &args.level {
        Some(names) => Ok(LevelFilter::from_names(names)?),
        None => config.log_level.filter_for(checker),
    }
}

/// Run every job on its own worker and coordinate output through `writer`
pub fn execute(
    args: &ReportArgs,
    config: &CheckframeConfig,
    writer: Box<dyn Write + Send>,
) -> Result<ReportOutcome> {
    let jobs = jobs_from_args(args);
    if jobs.is_empty() {
        let console = Logger::main(writer);
        console.log(&format!(
            "  {}",
            "No diagnostics to report (pass --tsc, --vue-tsc, --eslint or --lsp)".dimmed()
        ));
        return Ok(ReportOutcome::default());
    }

    let planned = jobs
        .into_iter()
        .map(|job| -> Result<(LevelFilter, CheckerJob)> {
            Ok((level_filter(args, config, job.checker)?, job))
        })
        .collect::<Result<Vec<_>>>()?;

    let (tx, coordinator) = Coordinator::new(writer);
    let mut handles = Vec::with_capacity(planned.len());

    for (filter, job) in planned {
        let logger = Logger::worker(tx.clone());
        let config = config.clone();
        let format = args.format;

        let handle = std::thread::Builder::new()
            .name(format!("checkframe-{}", job.checker))
            .spawn(move || {
                let _span = tracing::debug_span!("worker", checker = %job.checker).entered();
                tracing::debug!(input = %job.input.display(), "worker started");

                match run_job(&job, &filter, format, &config, &logger) {
                    Ok(counts) => counts,
                    Err(e) => {
                        logger.log(&format!(
                            "  {}: {:#}",
                            format!("[{}] failed", job.checker).red(),
                            e
                        ));
                        DiagnosticCounts::default()
                    }
                }
            })
            .context("spawn checker worker")?;
        handles.push(handle);
    }

    // Workers hold the only remaining senders; the coordinator stops once they finish
    drop(tx);
    let envelopes = coordinator.run();

    let mut counts = DiagnosticCounts::default();
    for handle in handles {
        let worker_counts = handle
            .join()
            .map_err(|_| anyhow!("checker worker panicked"))?;
        counts.errors += worker_counts.errors;
        counts.warnings += worker_counts.warnings;
    }

    tracing::debug!(errors = counts.errors, warnings = counts.warnings, "report finished");
    Ok(ReportOutcome { counts, envelopes })
}

fn run_job(
    job: &CheckerJob,
    filter: &LevelFilter,
    format: OutputFormat,
    config: &CheckframeConfig,
    logger: &Logger,
) -> Result<DiagnosticCounts> {
    let diagnostics = filter.apply(normalize_input(job, logger)?);
    let counts = DiagnosticCounts::tally(&diagnostics);

    match format {
        OutputFormat::Terminal if config.terminal.enabled => {
            for d in &diagnostics {
                logger.log(&diagnostic_to_terminal_log(d, Some(job.checker)));
            }
            let summary = compose_checker_summary(job.checker.as_str(), counts.errors, counts.warnings);
            logger.log(&summary.to_string());
        }
        OutputFormat::Overlay if config.overlay.enabled => {
            let payloads = diagnostics_to_runtime_errors(&diagnostics);
            logger.overlay(to_runtime_envelope(job.checker, payloads));
        }
        _ => {}
    }

    Ok(counts)
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn normalize_input(job: &CheckerJob, logger: &Logger) -> Result<Vec<NormalizedDiagnostic>> {
    let contents = read_input(&job.input)?;
    let parse_context = || format!("parse {} diagnostics from {}", job.checker, job.input.display());

    match job.checker {
        Checker::TypeScript | Checker::VueTsc => {
            let raw: Vec<TsDiagnostic> = serde_json::from_str(&contents).with_context(parse_context)?;
            let normalize: fn(&TsDiagnostic) -> NormalizedDiagnostic = match job.checker {
                Checker::VueTsc => normalize_vue_tsc_diagnostic,
                _ => normalize_ts_diagnostic,
            };
            Ok(raw.iter().map(normalize).collect())
        }
        Checker::EsLint => {
            let results: Vec<EslintLintResult> =
                serde_json::from_str(&contents).with_context(parse_context)?;
            Ok(normalize_eslint_results(&results))
        }
        Checker::Vls => {
            let notifications = serde_json::from_str::<OneOrMany<PublishDiagnosticsParams>>(&contents)
                .with_context(parse_context)?
                .into_vec();
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("start language-server reader")?;

            let mut diagnostics = Vec::new();
            for params in &notifications {
                match runtime.block_on(normalize_publish_diagnostic_params(params)) {
                    Ok(normalized) => diagnostics.extend(normalized),
                    // One unreadable document does not abort the others
                    Err(e) => logger.log(&format!("  {}: {}", "lsp error".red(), e)),
                }
            }
            Ok(diagnostics)
        }
    }
}
