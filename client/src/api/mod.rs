//! # Domain API Façades
//!
//! One module per backend resource group. Each function shapes the request
//! body the backend expects, sends it through [`ApiClient`] and hands back
//! the parsed payload. Input checks run before any request is made.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and the ApiService implementation
//! ├── auth.rs     - signup, login, me, refresh, logout
//! ├── upload.rs   - create (multipart), list, stats, get
//! ├── review.rs   - pending, approve, reject, get
//! ├── wallet.rs   - get, ledger, transactions, withdraw
//! └── user.rs     - profile, update_profile
//! ```

pub mod auth;
pub mod review;
pub mod upload;
pub mod user;
pub mod wallet;

pub use auth::SignupForm;

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::session::SessionContext;
use crate::transport::{ApiClient, UploadFile};
use shared::{
    AuthResponse, ReviewRecord, Transaction, UpdateProfileRequest, UploadRecord, UploadStats,
    UploadSummary, UserInfo, WalletSummary, WithdrawalReceipt,
};

#[async_trait::async_trait]
impl ApiService for ApiClient {
    fn session(&self) -> &SessionContext {
        ApiClient::session(self)
    }

    async fn signup(&self, form: &SignupForm) -> Result<AuthResponse> {
        auth::signup(self, form).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        auth::login(self, email, password).await
    }

    async fn me(&self) -> Result<UserInfo> {
        auth::me(self).await
    }

    async fn create_upload(
        &self,
        file: UploadFile,
        description: Option<String>,
        tags: Option<String>,
    ) -> Result<UploadRecord> {
        upload::create(self, file, description.as_deref(), tags.as_deref()).await
    }

    async fn list_uploads(&self, limit: u32, offset: u32) -> Result<Vec<UploadRecord>> {
        upload::list(self, limit, offset).await
    }

    async fn upload_stats(&self) -> Result<UploadStats> {
        upload::stats(self).await
    }

    async fn pending_reviews(&self, limit: u32, offset: u32) -> Result<Vec<UploadSummary>> {
        review::pending(self, limit, offset).await
    }

    async fn approve_upload(
        &self,
        upload_id: i64,
        quality_score: u8,
        comments: &str,
        reward_amount: f64,
    ) -> Result<Option<ReviewRecord>> {
        review::approve(self, upload_id, quality_score, comments, reward_amount).await
    }

    async fn reject_upload(
        &self,
        upload_id: i64,
        rejection_reason: &str,
        comments: &str,
    ) -> Result<Option<ReviewRecord>> {
        review::reject(self, upload_id, rejection_reason, comments).await
    }

    async fn wallet(&self) -> Result<WalletSummary> {
        wallet::get(self).await
    }

    async fn transactions(&self, limit: u32, offset: u32) -> Result<Option<Vec<Transaction>>> {
        wallet::ledger(self, limit, offset).await
    }

    async fn withdraw(
        &self,
        amount: f64,
        upi_id: Option<String>,
        bank_account: Option<String>,
    ) -> Result<WithdrawalReceipt> {
        wallet::withdraw(self, amount, upi_id.as_deref(), bank_account.as_deref()).await
    }

    async fn update_profile(&self, update: UpdateProfileRequest) -> Result<UserInfo> {
        user::update_profile(self, &update).await
    }
}
