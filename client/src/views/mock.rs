//! In-process `ApiService` for page tests.

use crate::api::SignupForm;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::session::{SessionContext, TokenStore};
use crate::transport::UploadFile;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    AuthResponse, ReviewRecord, Transaction, TransactionKind, TransactionStatus,
    UpdateProfileRequest, UploadRecord, UploadStats, UploadSummary, UserInfo, UserRole,
    WalletSummary, WithdrawalReceipt,
};

pub(crate) struct MockApi {
    session: SessionContext,
    pub pending: Mutex<Result<Vec<UploadSummary>>>,
    pub review: Mutex<Result<Option<ReviewRecord>>>,
    pub wallet: Mutex<Result<WalletSummary>>,
    pub transactions: Mutex<Result<Option<Vec<Transaction>>>>,
    pub withdraw: Mutex<Result<WithdrawalReceipt>>,
    pub upload: Mutex<Result<UploadRecord>>,
    pub calls: Mutex<Vec<String>>,
}

pub(crate) fn user(role: UserRole) -> UserInfo {
    UserInfo {
        id: 7,
        email: "mod@example.com".to_string(),
        name: Some("Mod".to_string()),
        username: None,
        role,
        bio: None,
        profile_picture: None,
    }
}

pub(crate) fn summary(id: i64) -> UploadSummary {
    UploadSummary {
        id,
        file_name: format!("file_{}.jpg", id),
        file_type: Some("image/jpeg".to_string()),
        file_size: None,
        uploader: None,
        uploaded_date: None,
        preview: None,
        description: None,
    }
}

pub(crate) fn txn(id: i64, kind: TransactionKind, amount: f64) -> Transaction {
    Transaction {
        id,
        kind,
        amount,
        description: "entry".to_string(),
        status: TransactionStatus::Completed,
        date: "2025-12-01".to_string(),
        file_name: None,
        file_size: None,
    }
}

fn not_mocked<T>() -> Result<T> {
    Err(AppError::Api {
        status: 501,
        message: "not mocked".to_string(),
    })
}

impl MockApi {
    fn with_session(session: SessionContext) -> Self {
        Self {
            session,
            pending: Mutex::new(Ok(Vec::new())),
            review: Mutex::new(Ok(None)),
            wallet: Mutex::new(Ok(WalletSummary::default())),
            transactions: Mutex::new(Ok(Some(Vec::new()))),
            withdraw: Mutex::new(Ok(WithdrawalReceipt::default())),
            upload: Mutex::new(not_mocked()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Session with a credential and a cached user of `role`.
    pub fn signed_in(role: UserRole) -> Self {
        let store = TokenStore::in_memory();
        store.set("tok123").unwrap();
        store.set_user(&user(role)).unwrap();
        Self::with_session(SessionContext::hydrate(store))
    }

    pub fn anonymous() -> Self {
        Self::with_session(SessionContext::in_memory())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Clone the scripted answer. A scripted 401 clears the session the
    /// way the dispatcher does.
    fn respond<T: Clone>(&self, call: String, slot: &Mutex<Result<T>>) -> Result<T> {
        self.calls.lock().push(call);
        let answer = slot.lock().clone();
        if let Err(AppError::Unauthorized(reason)) = &answer {
            self.session.invalidate(reason);
        }
        answer
    }
}

#[async_trait]
impl ApiService for MockApi {
    fn session(&self) -> &SessionContext {
        &self.session
    }

    async fn signup(&self, _form: &SignupForm) -> Result<AuthResponse> {
        not_mocked()
    }

    async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse> {
        not_mocked()
    }

    async fn me(&self) -> Result<UserInfo> {
        not_mocked()
    }

    async fn create_upload(
        &self,
        file: UploadFile,
        _description: Option<String>,
        _tags: Option<String>,
    ) -> Result<UploadRecord> {
        tokio::task::yield_now().await;
        self.respond(format!("upload {}", file.file_name), &self.upload)
    }

    async fn list_uploads(&self, _limit: u32, _offset: u32) -> Result<Vec<UploadRecord>> {
        not_mocked()
    }

    async fn upload_stats(&self) -> Result<UploadStats> {
        not_mocked()
    }

    async fn pending_reviews(&self, limit: u32, offset: u32) -> Result<Vec<UploadSummary>> {
        self.respond(format!("pending {} {}", limit, offset), &self.pending)
    }

    async fn approve_upload(
        &self,
        upload_id: i64,
        quality_score: u8,
        _comments: &str,
        reward_amount: f64,
    ) -> Result<Option<ReviewRecord>> {
        tokio::task::yield_now().await;
        self.respond(
            format!("approve {} {} {}", upload_id, quality_score, reward_amount),
            &self.review,
        )
    }

    async fn reject_upload(
        &self,
        upload_id: i64,
        rejection_reason: &str,
        _comments: &str,
    ) -> Result<Option<ReviewRecord>> {
        tokio::task::yield_now().await;
        self.respond(format!("reject {} {}", upload_id, rejection_reason), &self.review)
    }

    async fn wallet(&self) -> Result<WalletSummary> {
        self.respond("wallet".to_string(), &self.wallet)
    }

    async fn transactions(&self, limit: u32, offset: u32) -> Result<Option<Vec<Transaction>>> {
        self.respond(format!("transactions {} {}", limit, offset), &self.transactions)
    }

    async fn withdraw(
        &self,
        amount: f64,
        _upi_id: Option<String>,
        _bank_account: Option<String>,
    ) -> Result<WithdrawalReceipt> {
        tokio::task::yield_now().await;
        self.respond(format!("withdraw {}", amount), &self.withdraw)
    }

    async fn update_profile(&self, _update: UpdateProfileRequest) -> Result<UserInfo> {
        not_mocked()
    }
}
