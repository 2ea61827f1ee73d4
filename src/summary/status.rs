//! Report status and its JSON encoding

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Outcome of a build step as written in the `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Every item succeeded and no error was reported
    Success,
    /// Something failed, an error was reported, or a no-op was treated as failure
    Failure,
}

impl Status {
    /// Wire label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Failure => "failure",
        }
    }

    /// Map a wire label to a status.
    ///
    /// Total and fail-closed: only `"success"` (ASCII case-insensitive) maps to
    /// [`Status::Success`]; every other label, known or not, is a failure.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("success") {
            Status::Success
        } else {
            Status::Failure
        }
    }

    /// Check if this status reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Status::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Success).unwrap(), r#""success""#);
        assert_eq!(serde_json::to_string(&Status::Failure).unwrap(), r#""failure""#);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [Status::Success, Status::Failure] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_labels_fail_closed() {
        for label in [r#""ok""#, r#""""#, r#""failed""#, r#""succes""#, r#""passed""#] {
            let parsed: Status = serde_json::from_str(label).unwrap();
            assert_eq!(parsed, Status::Failure, "label {} should map to failure", label);
        }
    }

    #[test]
    fn test_success_label_ignores_case() {
        let parsed: Status = serde_json::from_str(r#""SUCCESS""#).unwrap();
        assert_eq!(parsed, Status::Success);
        assert_eq!(Status::from_label("Success"), Status::Success);
    }

    #[test]
    fn test_non_string_is_decode_error() {
        assert!(serde_json::from_str::<Status>("0").is_err());
        assert!(serde_json::from_str::<Status>("null").is_err());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Success.to_string(), "success");
        assert_eq!(Status::Failure.to_string(), "failure");
        assert!(Status::Failure.is_failure());
        assert!(!Status::Success.is_failure());
    }
}
