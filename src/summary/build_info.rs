//! Build-info summary: the base summary plus artifact digests

use serde::{Deserialize, Serialize};
use std::error::Error;

use super::report::{summary_report, Summary};
use crate::error::SummaryError;

/// Digest record for one processed artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sha256Entry {
    /// Content hash, stored as given
    pub sha256: String,
}

/// Summary report for a build-info publish step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfoSummary {
    #[serde(flatten)]
    pub summary: Summary,

    /// Digests of the published artifacts (always serialized, possibly empty)
    #[serde(rename = "files")]
    pub sha256_array: Vec<Sha256Entry>,
}

impl BuildInfoSummary {
    /// Build a summary for a build-info step.
    ///
    /// A no-op is never a failure here. The digest is recorded only when
    /// exactly one item succeeded; any other success count leaves `files`
    /// empty.
    pub fn new(success: usize, failed: usize, sha256: &str, err: Option<&dyn Error>) -> Self {
        let mut build_info = Self {
            summary: summary_report(success, failed, false, err),
            sha256_array: Vec::new(),
        };
        if success == 1 {
            build_info.add_sha256(sha256);
        }
        build_info
    }

    /// Append a digest record
    pub fn add_sha256(&mut self, sha256: &str) {
        self.sha256_array.push(Sha256Entry {
            sha256: sha256.to_string(),
        });
    }

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
