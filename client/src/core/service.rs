//! # Service Traits
//!
//! The seam between pages and the backend. Pages hold an
//! `Arc<dyn ApiService>` so tests can swap in an in-process mock.

use crate::api::auth::SignupForm;
use crate::core::error::Result;
use crate::session::SessionContext;
use crate::transport::UploadFile;
use async_trait::async_trait;
use shared::{
    AuthResponse, ReviewRecord, Transaction, UpdateProfileRequest, UploadRecord, UploadStats,
    UploadSummary, UserInfo, WalletSummary, WithdrawalReceipt,
};

/// Trait for API service operations
///
/// Implemented by [`ApiClient`](crate::transport::ApiClient); every method
/// forwards to the matching façade in [`crate::api`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Session the calls are authorized with
    fn session(&self) -> &SessionContext;

    /// Create an account and establish the session
    async fn signup(&self, form: &SignupForm) -> Result<AuthResponse>;

    /// Log in and establish the session
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Profile of the authenticated user
    async fn me(&self) -> Result<UserInfo>;

    /// Upload a file with optional description and tags
    async fn create_upload(
        &self,
        file: UploadFile,
        description: Option<String>,
        tags: Option<String>,
    ) -> Result<UploadRecord>;

    /// The user's uploads, newest first
    async fn list_uploads(&self, limit: u32, offset: u32) -> Result<Vec<UploadRecord>>;

    /// Upload counters for the dashboard
    async fn upload_stats(&self) -> Result<UploadStats>;

    /// Moderation queue (admin only)
    async fn pending_reviews(&self, limit: u32, offset: u32) -> Result<Vec<UploadSummary>>;

    /// Approve an upload and credit the uploader
    async fn approve_upload(
        &self,
        upload_id: i64,
        quality_score: u8,
        comments: &str,
        reward_amount: f64,
    ) -> Result<Option<ReviewRecord>>;

    /// Reject an upload with a reason
    async fn reject_upload(
        &self,
        upload_id: i64,
        rejection_reason: &str,
        comments: &str,
    ) -> Result<Option<ReviewRecord>>;

    /// Balance and lifetime totals
    async fn wallet(&self) -> Result<WalletSummary>;

    /// Wallet ledger; `None` when the backend sent no list
    async fn transactions(&self, limit: u32, offset: u32) -> Result<Option<Vec<Transaction>>>;

    /// Request a withdrawal to UPI or a bank account
    async fn withdraw(
        &self,
        amount: f64,
        upi_id: Option<String>,
        bank_account: Option<String>,
    ) -> Result<WithdrawalReceipt>;

    /// Update profile fields and refresh the cached user
    async fn update_profile(&self, update: UpdateProfileRequest) -> Result<UserInfo>;
}
