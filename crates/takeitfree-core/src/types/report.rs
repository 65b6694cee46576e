//! User reports - append-only records of abuse reports.
//!
//! No operation transitions a report beyond `pending`; moderation is out
//! of scope for the on-device core.

use serde::{Deserialize, Serialize};

/// Longest free-text details a report may carry, in characters.
pub const MAX_DETAILS_LEN: usize = 500;

/// Why a user was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Spam,
    Selling,
    Inappropriate,
    FakeAccount,
    Harassment,
}

impl ReportReason {
    /// All reasons, in the order the UI presents them.
    pub const ALL: [ReportReason; 5] = [
        ReportReason::Spam,
        ReportReason::Selling,
        ReportReason::Inappropriate,
        ReportReason::FakeAccount,
        ReportReason::Harassment,
    ];

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            ReportReason::Spam => "Spam",
            ReportReason::Selling => "Selling items",
            ReportReason::Inappropriate => "Inappropriate behavior",
            ReportReason::FakeAccount => "Fake account",
            ReportReason::Harassment => "Harassment",
        }
    }
}

/// Moderation status. Reports stay `pending` on-device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
}

/// One abuse report, reporter and reported identities snapshotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    pub id: String,
    pub reporter_id: String,
    pub reporter_name: String,
    pub reported_user_id: String,
    pub reported_username: String,
    pub reason: ReportReason,
    /// Optional free text, at most [`MAX_DETAILS_LEN`] chars
    pub details: String,
    pub status: ReportStatus,
    pub created_at: i64,
}

/// Caller-supplied fields for a new report. Reporter identity is
/// snapshotted from the current profile by the store.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub reported_user_id: String,
    pub reported_username: String,
    pub reason: ReportReason,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReportReason::FakeAccount).unwrap(),
            "\"fake_account\""
        );
    }

    #[test]
    fn test_reason_labels() {
        assert_eq!(ReportReason::ALL.len(), 5);
        assert_eq!(ReportReason::Selling.label(), "Selling items");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReportStatus::Pending).unwrap(), "\"pending\"");
    }
}
