//! Rendering summaries and writing them to a log sink
//!
//! The caller's own step error always takes precedence over a failure to
//! render the report: a rendering error is logged, and only returned when
//! the step itself reported no error.

mod sink;

pub use sink::{LogSink, MemorySink, StdLogSink};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;

use crate::error::SummaryError;
use crate::summary::BuildInfoSummary;

/// Indent used for rendered reports
pub const REPORT_INDENT: &[u8] = b"  ";

/// Serialize a value to JSON indented with [`REPORT_INDENT`]
pub fn to_indented_string<T: Serialize + ?Sized>(value: &T) -> Result<String, SummaryError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(REPORT_INDENT));
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Build a [`BuildInfoSummary`] and render it as indented JSON
pub fn create_build_info_summary_report_string(
    success: usize,
    failed: usize,
    sha256: &str,
    err: Option<&dyn Error>,
) -> Result<String, SummaryError> {
    let build_info = BuildInfoSummary::new(success, failed, sha256, err);
    to_indented_string(&build_info)
}

/// Report the outcome of a build-info step.
///
/// `succeeded` counts as one success or one failure. The rendered report is
/// written to `sink`; the return value follows [`summary_print_error`], so an
/// `original` error comes back unchanged.
pub fn print_build_info_summary_report<E>(
    sink: &dyn LogSink,
    succeeded: bool,
    sha256: &str,
    original: Option<E>,
) -> Result<(), E>
where
    E: Error + From<SummaryError>,
{
    let (success, failed) = if succeeded { (1, 0) } else { (0, 1) };
    let rendered = create_build_info_summary_report_string(
        success,
        failed,
        sha256,
        original.as_ref().map(|e| e as &dyn Error),
    );

    match rendered {
        Ok(report) => {
            log::debug!("writing build-info summary ({} bytes)", report.len());
            sink.output(&report);
            summary_print_error(sink, None, original)
        }
        Err(summary_err) => summary_print_error(sink, Some(summary_err), original),
    }
}

/// Choose which error a reporting call returns.
///
/// A `summary_err` is always written to the sink's error channel. The
/// `original` error wins when present; otherwise `summary_err` is returned
/// converted into the caller's error type.
pub fn summary_print_error<E>(
    sink: &dyn LogSink,
    summary_err: Option<SummaryError>,
    original: Option<E>,
) -> Result<(), E>
where
    E: From<SummaryError>,
{
    if let Some(ref err) = summary_err {
        sink.error(err);
    }
    match (original, summary_err) {
        (Some(original), _) => Err(original),
        (None, Some(summary_err)) => Err(summary_err.into()),
        (None, None) => Ok(()),
    }
}
