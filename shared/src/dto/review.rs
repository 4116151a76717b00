use serde::{Deserialize, Serialize};

use super::lenient;

/// Body of `POST /reviews/{upload_id}/approve`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApproveRequest {
    pub quality_score: u8,
    pub comments: String,
    pub reward_amount: f64,
}

/// Body of `POST /reviews/{upload_id}/reject`.
///
/// Rejections always carry a zero quality score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectRequest {
    pub rejection_reason: String,
    pub comments: String,
    pub quality_score: u8,
}

/// Review outcome returned by approve/reject and `GET /reviews/{upload_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub reward_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reasons a moderator can pick when rejecting an upload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    LowQuality,
    Copyrighted,
    Inappropriate,
    Corrupted,
    Duplicate,
    WrongCategory,
    Other,
}

impl RejectionReason {
    pub fn all() -> &'static [RejectionReason] {
        &[
            RejectionReason::LowQuality,
            RejectionReason::Copyrighted,
            RejectionReason::Inappropriate,
            RejectionReason::Corrupted,
            RejectionReason::Duplicate,
            RejectionReason::WrongCategory,
            RejectionReason::Other,
        ]
    }

    /// Wire value sent as `rejection_reason`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::LowQuality => "low_quality",
            RejectionReason::Copyrighted => "copyrighted",
            RejectionReason::Inappropriate => "inappropriate",
            RejectionReason::Corrupted => "corrupted",
            RejectionReason::Duplicate => "duplicate",
            RejectionReason::WrongCategory => "wrong_category",
            RejectionReason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RejectionReason::LowQuality => "Low Quality/Blurry",
            RejectionReason::Copyrighted => "Copyrighted Content",
            RejectionReason::Inappropriate => "Inappropriate Content",
            RejectionReason::Corrupted => "Corrupted File",
            RejectionReason::Duplicate => "Duplicate Upload",
            RejectionReason::WrongCategory => "Wrong Category",
            RejectionReason::Other => "Other",
        }
    }
}

impl std::str::FromStr for RejectionReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RejectionReason::all()
            .iter()
            .copied()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| format!("Unknown rejection reason: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_reason_wire_values() {
        for reason in RejectionReason::all() {
            let json = serde_json::to_string(reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
            assert_eq!(reason.as_str().parse::<RejectionReason>().unwrap(), *reason);
        }
        assert!("blurry".parse::<RejectionReason>().is_err());
    }

    #[test]
    fn test_review_record_tolerates_message_only_body() {
        let record: ReviewRecord = serde_json::from_str(r#"{"message": "Upload approved"}"#).unwrap();
        assert_eq!(record.message.as_deref(), Some("Upload approved"));
        assert!(record.id.is_none());
    }
}
