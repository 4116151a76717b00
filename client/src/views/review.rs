//! # Review Panel
//!
//! The admin moderation queue.
//!
//! ```text
//! Loading ─┬─> Unauthorized   (no credential, or a 401 later on)
//!          ├─> Forbidden      (cached user is not an admin)
//!          ├─> Failed         (queue could not be fetched)
//!          └─> Ready <──> Reviewing
//! ```
//!
//! A decision removes the reviewed item only after the backend accepts it.

use super::require_credential;
use crate::api::review::DEFAULT_REWARD;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use parking_lot::RwLock;
use shared::{RejectionReason, UploadSummary};
use std::sync::Arc;

/// Score the form resets to after every decision.
pub const DEFAULT_QUALITY_SCORE: u8 = 50;
pub const ADMIN_ONLY: &str = "Admin access only. Please contact support if you need access.";
/// Items fetched per load.
pub const QUEUE_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewPhase {
    #[default]
    Loading,
    Unauthorized,
    Forbidden,
    Ready,
    /// A decision is in flight. No second decision may start.
    Reviewing,
    Failed,
}

impl ReviewPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReviewPhase::Unauthorized | ReviewPhase::Forbidden)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewState {
    pub phase: ReviewPhase,
    pub queue: Vec<UploadSummary>,
    pub selected: Option<i64>,
    pub quality_score: u8,
    pub comments: String,
    pub rejection_reason: Option<RejectionReason>,
    pub error: Option<String>,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            phase: ReviewPhase::Loading,
            queue: Vec::new(),
            selected: None,
            quality_score: DEFAULT_QUALITY_SCORE,
            comments: String::new(),
            rejection_reason: None,
            error: None,
        }
    }
}

impl ReviewState {
    pub fn selected_item(&self) -> Option<&UploadSummary> {
        let id = self.selected?;
        self.queue.iter().find(|item| item.id == id)
    }

    fn reset_form(&mut self) {
        self.quality_score = DEFAULT_QUALITY_SCORE;
        self.comments.clear();
        self.rejection_reason = None;
    }

    /// Drop a reviewed item and select the first one left, if any.
    fn remove_reviewed(&mut self, upload_id: i64) {
        self.queue.retain(|item| item.id != upload_id);
        self.selected = self.queue.first().map(|item| item.id);
        self.reset_form();
    }

    fn fail(&mut self, err: &AppError) {
        self.phase = if err.is_unauthorized() {
            ReviewPhase::Unauthorized
        } else {
            ReviewPhase::Ready
        };
        self.error = Some(err.to_string());
    }
}

enum Decision {
    Approve { quality_score: u8, comments: String },
    Reject { reason: RejectionReason, comments: String },
}

pub struct ReviewPanel {
    api: Arc<dyn ApiService>,
    state: Arc<RwLock<ReviewState>>,
}

impl ReviewPanel {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(ReviewState::default())),
        }
    }

    pub fn snapshot(&self) -> ReviewState {
        self.state.read().clone()
    }

    pub fn phase(&self) -> ReviewPhase {
        self.state.read().phase
    }

    /// Check access and fetch the queue, selecting its first item.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<()> {
        self.state.write().phase = ReviewPhase::Loading;

        if let Err(err) = require_credential(self.api.session()) {
            let mut state = self.state.write();
            state.phase = ReviewPhase::Unauthorized;
            state.error = Some(err.to_string());
            return Err(err);
        }

        let is_admin = self.api.session().user().is_some_and(|u| u.is_admin());
        if !is_admin {
            tracing::warn!("Review panel opened by a non-admin user");
            let err = AppError::Forbidden(ADMIN_ONLY.to_string());
            let mut state = self.state.write();
            state.phase = ReviewPhase::Forbidden;
            state.error = Some(err.to_string());
            return Err(err);
        }

        match self.api.pending_reviews(QUEUE_PAGE_SIZE, 0).await {
            Ok(queue) => {
                tracing::info!(count = queue.len(), "Review queue loaded");
                let mut state = self.state.write();
                state.selected = queue.first().map(|item| item.id);
                state.queue = queue;
                state.phase = ReviewPhase::Ready;
                state.error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load review queue");
                let mut state = self.state.write();
                state.phase = if err.is_unauthorized() {
                    ReviewPhase::Unauthorized
                } else {
                    ReviewPhase::Failed
                };
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Select a queue item. Unknown ids are ignored.
    pub fn select(&self, upload_id: i64) -> bool {
        let mut state = self.state.write();
        if state.queue.iter().any(|item| item.id == upload_id) {
            state.selected = Some(upload_id);
            true
        } else {
            false
        }
    }

    pub fn set_quality_score(&self, score: u8) {
        self.state.write().quality_score = score.min(100);
    }

    pub fn set_comments(&self, comments: impl Into<String>) {
        self.state.write().comments = comments.into();
    }

    pub fn set_rejection_reason(&self, reason: Option<RejectionReason>) {
        self.state.write().rejection_reason = reason;
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Approve the selected item with the form's score and comments.
    pub async fn approve(&self) -> Result<()> {
        let (upload_id, decision) = {
            let mut state = self.state.write();
            let upload_id = Self::begin(&mut state)?;
            let decision = Decision::Approve {
                quality_score: state.quality_score,
                comments: state.comments.clone(),
            };
            (upload_id, decision)
        };
        self.decide(upload_id, decision).await
    }

    /// Reject the selected item. A rejection reason is required.
    pub async fn reject(&self) -> Result<()> {
        let (upload_id, decision) = {
            let mut state = self.state.write();
            let Some(reason) = state.rejection_reason else {
                let err = AppError::Validation("Please select a rejection reason".to_string());
                state.error = Some(err.to_string());
                return Err(err);
            };
            let upload_id = Self::begin(&mut state)?;
            let decision = Decision::Reject {
                reason,
                comments: state.comments.clone(),
            };
            (upload_id, decision)
        };
        self.decide(upload_id, decision).await
    }

    /// Move to `Reviewing`, returning the item under review.
    fn begin(state: &mut ReviewState) -> Result<i64> {
        match state.phase {
            ReviewPhase::Ready => {}
            ReviewPhase::Reviewing => {
                return Err(AppError::Validation(
                    "A review is already in progress".to_string(),
                ))
            }
            _ => return Err(AppError::Validation("Review queue is not loaded".to_string())),
        }

        let Some(upload_id) = state.selected_item().map(|item| item.id) else {
            return Err(AppError::Validation("Select an upload to review".to_string()));
        };

        state.phase = ReviewPhase::Reviewing;
        state.error = None;
        Ok(upload_id)
    }

    async fn decide(&self, upload_id: i64, decision: Decision) -> Result<()> {
        let (action, outcome) = match &decision {
            Decision::Approve {
                quality_score,
                comments,
            } => (
                "approve",
                self.api
                    .approve_upload(upload_id, *quality_score, comments, DEFAULT_REWARD)
                    .await,
            ),
            Decision::Reject { reason, comments } => (
                "reject",
                self.api
                    .reject_upload(upload_id, reason.as_str(), comments)
                    .await,
            ),
        };

        let mut state = self.state.write();
        match outcome {
            Ok(_) => {
                tracing::info!(upload_id, action, "Review recorded");
                state.remove_reviewed(upload_id);
                state.phase = ReviewPhase::Ready;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(upload_id, action, error = %err, "Review failed");
                state.fail(&err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::mock::{summary, MockApi};
    use shared::UserRole;

    async fn loaded(ids: &[i64]) -> (Arc<MockApi>, ReviewPanel) {
        let api = Arc::new(MockApi::signed_in(UserRole::Admin));
        *api.pending.lock() = Ok(ids.iter().copied().map(summary).collect());
        let panel = ReviewPanel::new(api.clone());
        panel.load().await.unwrap();
        (api, panel)
    }

    fn queue_ids(panel: &ReviewPanel) -> Vec<i64> {
        panel.snapshot().queue.iter().map(|item| item.id).collect()
    }

    #[tokio::test]
    async fn test_load_selects_first_item() {
        let (api, panel) = loaded(&[4, 5, 6]).await;
        let state = panel.snapshot();
        assert_eq!(state.phase, ReviewPhase::Ready);
        assert_eq!(state.selected, Some(4));
        assert_eq!(api.calls(), vec!["pending 10 0"]);
    }

    #[tokio::test]
    async fn test_anonymous_user_is_unauthorized() {
        let api = Arc::new(MockApi::anonymous());
        let panel = ReviewPanel::new(api.clone());
        assert!(panel.load().await.unwrap_err().is_unauthorized());
        assert_eq!(panel.phase(), ReviewPhase::Unauthorized);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let api = Arc::new(MockApi::signed_in(UserRole::User));
        let panel = ReviewPanel::new(api.clone());
        let err = panel.load().await.unwrap_err();
        assert_eq!(err, AppError::Forbidden(ADMIN_ONLY.to_string()));
        assert!(!matches!(err, AppError::Validation(_)));
        assert_eq!(panel.phase(), ReviewPhase::Forbidden);
        assert!(api.session().is_authenticated());
        assert!(panel.phase().is_terminal());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_queue_failure_is_fatal() {
        let api = Arc::new(MockApi::signed_in(UserRole::Admin));
        *api.pending.lock() = Err(AppError::Api {
            status: 500,
            message: "db down".to_string(),
        });
        let panel = ReviewPanel::new(api);
        assert!(panel.load().await.is_err());
        let state = panel.snapshot();
        assert_eq!(state.phase, ReviewPhase::Failed);
        assert_eq!(state.error.as_deref(), Some("db down"));
    }

    #[tokio::test]
    async fn test_approve_removes_exactly_that_item() {
        let (api, panel) = loaded(&[1, 2, 3, 4]).await;
        assert!(panel.select(3));
        panel.set_quality_score(80);
        panel.approve().await.unwrap();

        assert_eq!(queue_ids(&panel), vec![1, 2, 4]);
        let state = panel.snapshot();
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.quality_score, DEFAULT_QUALITY_SCORE);
        assert_eq!(state.phase, ReviewPhase::Ready);
        assert!(api.calls().contains(&format!("approve 3 80 {}", DEFAULT_REWARD)));
    }

    #[tokio::test]
    async fn test_last_item_clears_selection() {
        let (_api, panel) = loaded(&[9]).await;
        panel.approve().await.unwrap();
        let state = panel.snapshot();
        assert!(state.queue.is_empty());
        assert_eq!(state.selected, None);
    }

    #[tokio::test]
    async fn test_failed_decision_keeps_item() {
        let (api, panel) = loaded(&[1, 2]).await;
        *api.review.lock() = Err(AppError::Api {
            status: 400,
            message: "Upload already reviewed".to_string(),
        });
        assert!(panel.approve().await.is_err());

        let state = panel.snapshot();
        assert_eq!(queue_ids(&panel), vec![1, 2]);
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.phase, ReviewPhase::Ready);
        assert_eq!(state.error.as_deref(), Some("Upload already reviewed"));
    }

    #[tokio::test]
    async fn test_reject_requires_reason() {
        let (api, panel) = loaded(&[1]).await;
        let err = panel.reject().await.unwrap_err();
        assert_eq!(err, AppError::Validation("Please select a rejection reason".to_string()));
        assert_eq!(api.calls().len(), 1);

        panel.set_rejection_reason(Some(RejectionReason::Duplicate));
        panel.reject().await.unwrap();
        assert!(api.calls().contains(&"reject 1 duplicate".to_string()));
        assert!(panel.snapshot().rejection_reason.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_during_review_is_terminal() {
        let (api, panel) = loaded(&[1, 2]).await;
        *api.review.lock() = Err(AppError::Unauthorized("expired".to_string()));
        assert!(panel.approve().await.unwrap_err().is_unauthorized());
        assert_eq!(panel.phase(), ReviewPhase::Unauthorized);
        assert!(api.session().credential().is_none());
        assert!(panel.approve().await.is_err());
    }

    #[tokio::test]
    async fn test_second_decision_refused_while_in_flight() {
        let (api, panel) = loaded(&[1, 2]).await;
        let (first, second) = tokio::join!(panel.approve(), panel.approve());
        assert!(first.is_ok());
        assert_eq!(
            second,
            Err(AppError::Validation("A review is already in progress".to_string()))
        );
        assert_eq!(queue_ids(&panel), vec![2]);
        assert_eq!(api.calls().iter().filter(|c| c.starts_with("approve")).count(), 1);
    }
}
