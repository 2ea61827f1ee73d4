//! Summary reports for build steps
//!
//! A [`Summary`] carries a derived [`Status`] and the step's [`Totals`]; a
//! [`BuildInfoSummary`] adds the digests of the artifacts it published.

mod build_info;
mod report;
mod status;

pub use build_info::{BuildInfoSummary, Sha256Entry};
pub use report::{summary_report, Summary, Totals};
pub use status::Status;
