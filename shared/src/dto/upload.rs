use serde::{Deserialize, Serialize};

use super::lenient;

/// An upload as returned by `POST /uploads/`, `GET /uploads/` and `GET /uploads/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadRecord {
    pub id: i64,
    #[serde(default, alias = "filename", alias = "fileName")]
    pub file_name: String,
    #[serde(default, alias = "fileType", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(
        default,
        alias = "fileSize",
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// An entry of the moderation queue (`GET /reviews/pending`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadSummary {
    pub id: i64,
    #[serde(default, alias = "filename", alias = "fileName")]
    pub file_name: String,
    #[serde(default, alias = "fileType", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(
        default,
        alias = "fileSize",
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(
        default,
        alias = "uploadedDate",
        alias = "created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-user upload statistics (`GET /uploads/stats`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadStats {
    #[serde(default)]
    pub total_uploads: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_earned: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accepts_camel_case_queue_items() {
        let item: UploadSummary = serde_json::from_str(
            r#"{"id": 7, "fileName": "cat.jpg", "fileType": "image", "fileSize": "2.5", "uploader": "bob", "uploadedDate": "2025-12-01"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.file_name, "cat.jpg");
        assert_eq!(item.file_size, Some(2.5));
        assert_eq!(item.uploaded_date.as_deref(), Some("2025-12-01"));
    }

    #[test]
    fn test_stats_default_missing_fields() {
        let stats: UploadStats = serde_json::from_str(r#"{"total_uploads": 4, "approved": 3}"#).unwrap();
        assert_eq!(stats.total_uploads, 4);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.total_earned, 0.0);
    }
}
