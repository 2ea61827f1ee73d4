//! Base summary: derived status plus totals

use serde::{Deserialize, Serialize};
use std::error::Error;

use super::status::Status;
use crate::error::SummaryError;

/// Item counts for one build step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Items that succeeded
    pub success: usize,

    /// Items that failed
    pub failure: usize,
}

/// Summary report (`status` + `totals`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Derived status
    pub status: Status,

    /// Counts copied from the caller
    pub totals: Totals,
}

impl Summary {
    /// Serialize to compact JSON bytes
    pub fn marshal(&self) -> Result<Vec<u8>, SummaryError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json(&self) -> Result<String, SummaryError> {
        crate::report::to_indented_string(self)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Build a summary from item counts and an optional step error.
///
/// The status is a failure when an error is given, when any item failed, or
/// when nothing succeeded and `fail_no_op` is set.
pub fn summary_report(
    success: usize,
    failed: usize,
    fail_no_op: bool,
    err: Option<&dyn Error>,
) -> Summary {
    let status = if err.is_some() || failed > 0 || (success == 0 && fail_no_op) {
        Status::Failure
    } else {
        Status::Success
    };

    Summary {
        status,
        totals: Totals {
            success,
            failure: failed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_no_success_no_failure_is_success_by_default() {
        let summary = summary_report(0, 0, false, None);
        assert_eq!(summary.status, Status::Success);
        assert_eq!(summary.totals, Totals { success: 0, failure: 0 });
    }

    #[test]
    fn test_status_tracks_failed_count_when_nothing_succeeded() {
        for failed in 0..5 {
            let summary = summary_report(0, failed, false, None);
            assert_eq!(summary.status.is_failure(), failed > 0, "failed = {}", failed);
        }
    }

    #[test]
    fn test_successes_without_failures_succeed() {
        for success in [1, 2, 10, 10_000] {
            assert_eq!(summary_report(success, 0, false, None).status, Status::Success);
        }
    }

    #[test]
    fn test_fail_no_op() {
        assert_eq!(summary_report(0, 0, true, None).status, Status::Failure);
        assert_eq!(summary_report(3, 0, true, None).status, Status::Success);
    }

    #[test]
    fn test_error_forces_failure() {
        let err = io::Error::new(io::ErrorKind::Other, "upload failed");
        let summary = summary_report(7, 0, false, Some(&err));
        assert_eq!(summary.status, Status::Failure);
        assert_eq!(summary.totals, Totals { success: 7, failure: 0 });
    }

    #[test]
    fn test_serialization() {
        let summary = summary_report(3, 1, false, None);
        let value: serde_json::Value = serde_json::from_slice(&summary.marshal().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "failure",
                "totals": { "success": 3, "failure": 1 }
            })
        );
        assert!(value.get("files").is_none());
    }

    #[test]
    fn test_deserialization() {
        let summary = summary_report(2, 0, false, None);
        let parsed = Summary::from_json(&summary.to_json().unwrap()).unwrap();
        assert_eq!(parsed, summary);
    }
}
