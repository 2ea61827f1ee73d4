//! build-summary CLI
//!
//! Entry point for the `build-summary` command-line tool.

use build_summary::config::DEFAULT_CONFIG_PATH;
use build_summary::digest::sha256_file;
use build_summary::{
    print_build_info_summary_report, summary_report, ReportConfig, StdLogSink, SummaryError,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "build-summary")]
#[command(about = "Build-step summary reports", version)]
struct Cli {
    /// Path to config file (default: .build-summary.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the build-info summary for a single publish step
    Report {
        /// The step failed
        #[arg(long)]
        failed: bool,

        /// Digest of the published artifact
        #[arg(long, conflicts_with = "artifact")]
        sha256: Option<String>,

        /// Artifact file to hash instead of passing --sha256
        #[arg(long)]
        artifact: Option<PathBuf>,

        /// Error reported by the step
        #[arg(long)]
        error: Option<String>,
    },

    /// Print a summary from item counts
    Summary {
        /// Number of items that succeeded
        #[arg(long, default_value_t = 0)]
        success: usize,

        /// Number of items that failed
        #[arg(long, default_value_t = 0)]
        failure: usize,

        /// Treat zero successes as a failure
        #[arg(long)]
        fail_no_op: bool,

        /// Error reported by the step
        #[arg(long)]
        error: Option<String>,
    },

    /// Print the SHA-256 digest of a file
    Digest {
        /// File to hash
        path: PathBuf,
    },
}

/// Error surfaced by a reported step
#[derive(Debug, thiserror::Error)]
enum StepError {
    #[error("{0}")]
    Step(String),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match ReportConfig::load_or_default(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Report {
            failed,
            sha256,
            artifact,
            error,
        } => run_report(failed, sha256, artifact, error),
        Commands::Summary {
            success,
            failure,
            fail_no_op,
            error,
        } => run_summary(&config, success, failure, fail_no_op, error),
        Commands::Digest { path } => run_digest(path),
    }
}

fn run_report(failed: bool, sha256: Option<String>, artifact: Option<PathBuf>, error: Option<String>) {
    let sha256 = match (sha256, artifact) {
        (Some(digest), _) => digest,
        (None, Some(path)) => match sha256_file(&path) {
            Ok(digest) => digest,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        (None, None) => String::new(),
    };

    let original = error.map(StepError::Step);
    match print_build_info_summary_report(&StdLogSink, !failed, &sha256, original) {
        Ok(()) => process::exit(0),
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    }
}

fn run_summary(
    config: &ReportConfig,
    success: usize,
    failure: usize,
    fail_no_op: bool,
    error: Option<String>,
) {
    let original = error.map(StepError::Step);
    let summary = summary_report(
        success,
        failure,
        fail_no_op || config.fail_no_op,
        original.as_ref().map(|e| e as &dyn std::error::Error),
    );

    match summary.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }

    if let Some(e) = original {
        log::error!("{}", e);
    }
    if summary.status.is_failure() {
        process::exit(1);
    }
}

fn run_digest(path: PathBuf) {
    match sha256_file(&path) {
        Ok(digest) => println!("{}", digest),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
