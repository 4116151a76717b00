//! # Review Endpoints
//!
//! The moderation queue and approve/reject decisions. The backend restricts
//! these to admins; a non-admin caller gets its error text back unchanged.

use crate::core::error::{AppError, Result};
use crate::transport::url::paginated;
use crate::transport::{ApiClient, ApiRequest};
use shared::{ApproveRequest, RejectRequest, ReviewRecord, UploadSummary};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_REWARD: f64 = 10.0;
pub const MAX_QUALITY_SCORE: u8 = 100;

pub async fn pending(client: &ApiClient, limit: u32, offset: u32) -> Result<Vec<UploadSummary>> {
    let queue: Option<Vec<UploadSummary>> = client
        .call(ApiRequest::get(paginated("/reviews/pending", limit, offset)))
        .await?;
    Ok(queue.unwrap_or_default())
}

/// Body for an approval. The score must lie in `0..=100`.
pub fn approve_body(quality_score: u8, comments: &str, reward_amount: f64) -> Result<ApproveRequest> {
    if quality_score > MAX_QUALITY_SCORE {
        return Err(AppError::Validation(
            "Quality score must be between 0 and 100".to_string(),
        ));
    }
    if !reward_amount.is_finite() || reward_amount < 0.0 {
        return Err(AppError::Validation("Invalid reward amount".to_string()));
    }
    Ok(ApproveRequest {
        quality_score,
        comments: comments.to_string(),
        reward_amount,
    })
}

/// Body for a rejection. Rejections always score zero.
pub fn reject_body(rejection_reason: &str, comments: &str) -> Result<RejectRequest> {
    if rejection_reason.trim().is_empty() {
        return Err(AppError::Validation(
            "Please select a rejection reason".to_string(),
        ));
    }
    Ok(RejectRequest {
        rejection_reason: rejection_reason.to_string(),
        comments: comments.to_string(),
        quality_score: 0,
    })
}

#[tracing::instrument(skip(client, comments))]
pub async fn approve(
    client: &ApiClient,
    upload_id: i64,
    quality_score: u8,
    comments: &str,
    reward_amount: f64,
) -> Result<Option<ReviewRecord>> {
    let body = approve_body(quality_score, comments, reward_amount)?;
    let request = ApiRequest::post(format!("/reviews/{}/approve", upload_id)).json(&body)?;
    let record = client.call(request).await?;
    tracing::info!("Upload approved");
    Ok(record)
}

#[tracing::instrument(skip(client, comments))]
pub async fn reject(
    client: &ApiClient,
    upload_id: i64,
    rejection_reason: &str,
    comments: &str,
) -> Result<Option<ReviewRecord>> {
    let body = reject_body(rejection_reason, comments)?;
    let request = ApiRequest::post(format!("/reviews/{}/reject", upload_id)).json(&body)?;
    let record = client.call(request).await?;
    tracing::info!("Upload rejected");
    Ok(record)
}

pub async fn get(client: &ApiClient, upload_id: i64) -> Result<Option<ReviewRecord>> {
    client
        .call(ApiRequest::get(format!("/reviews/{}", upload_id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_body_bounds() {
        assert!(approve_body(100, "", DEFAULT_REWARD).is_ok());
        assert!(approve_body(0, "", DEFAULT_REWARD).is_ok());
        assert!(approve_body(101, "", DEFAULT_REWARD).is_err());
        assert!(approve_body(50, "", f64::NAN).is_err());
    }

    #[test]
    fn test_reject_body_scores_zero() {
        let body = reject_body("low_quality", "blurry").unwrap();
        assert_eq!(body.quality_score, 0);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "rejection_reason": "low_quality",
                "comments": "blurry",
                "quality_score": 0
            })
        );
    }

    #[test]
    fn test_reject_requires_reason() {
        assert_eq!(
            reject_body("  ", ""),
            Err(AppError::Validation("Please select a rejection reason".to_string()))
        );
    }
}
