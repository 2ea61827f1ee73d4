//! Build summary reports
//!
//! This crate turns the outcome of a build step (succeeded/failed counts, an
//! optional artifact digest, an optional error) into a small indented JSON
//! report and writes it to a log sink.

pub mod config;
pub mod digest;
pub mod error;
pub mod report;
pub mod summary;

pub use config::{ConfigError, ReportConfig};
pub use error::SummaryError;
pub use report::{
    create_build_info_summary_report_string, print_build_info_summary_report,
    summary_print_error, to_indented_string, LogSink, MemorySink, StdLogSink,
};
pub use summary::{summary_report, BuildInfoSummary, Sha256Entry, Status, Summary, Totals};
