//! Status reported by the server's mutating endpoints.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The literal the server uses to signal success.
pub const SUCCESS_STATUS: &str = "success";

/// Value of the `status` field of an [`ActionResult`].
///
/// Anything other than `"success"` is kept verbatim for logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionStatus {
    Success,
    Other(String),
}

impl ActionStatus {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => SUCCESS_STATUS,
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ActionStatus {
    fn from(s: String) -> Self {
        if s == SUCCESS_STATUS {
            Self::Success
        } else {
            Self::Other(s)
        }
    }
}

impl From<ActionStatus> for String {
    fn from(status: ActionStatus) -> Self {
        match status {
            ActionStatus::Success => SUCCESS_STATUS.to_string(),
            ActionStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of the account, activate and save endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub status: ActionStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_exact_match() {
        let ok: ActionResult = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.status.is_success());

        let upper: ActionResult = serde_json::from_str(r#"{"status":"SUCCESS"}"#).unwrap();
        assert_eq!(upper.status, ActionStatus::Other("SUCCESS".to_string()));
    }

    #[test]
    fn test_other_status_kept_verbatim() {
        let exists: ActionResult = serde_json::from_str(r#"{"status":"exists"}"#).unwrap();
        assert!(!exists.status.is_success());
        assert_eq!(exists.status.to_string(), "exists");
    }

    #[test]
    fn test_missing_status_fails_to_parse() {
        assert!(serde_json::from_str::<ActionResult>("{}").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ActionResult {
            status: ActionStatus::Success,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }
}
