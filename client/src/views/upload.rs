//! # Upload Page

use super::{require_credential, PagePhase, Redirect};
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::transport::UploadFile;
use parking_lot::RwLock;
use shared::UploadRecord;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub phase: PagePhase,
    pub file: Option<UploadFile>,
    pub description: String,
    pub tags: String,
    pub uploading: bool,
    pub created: Option<UploadRecord>,
    pub error: Option<String>,
}

pub struct UploadPage {
    api: Arc<dyn ApiService>,
    state: Arc<RwLock<UploadState>>,
}

impl UploadPage {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(UploadState::default())),
        }
    }

    pub fn snapshot(&self) -> UploadState {
        self.state.read().clone()
    }

    /// Login when the session is gone, history after a successful upload.
    pub fn redirect(&self) -> Option<Redirect> {
        let state = self.state.read();
        match state.phase.redirect() {
            Some(redirect) => Some(redirect),
            None if state.created.is_some() => Some(Redirect::History),
            None => None,
        }
    }

    /// The page needs nothing from the backend up front, only a session.
    pub fn load(&self) -> Result<()> {
        let mut state = self.state.write();
        match require_credential(self.api.session()) {
            Ok(_) => {
                state.phase = PagePhase::Ready;
                Ok(())
            }
            Err(err) => {
                state.phase = PagePhase::LoginRequired;
                Err(err)
            }
        }
    }

    pub fn select_file(&self, file: UploadFile) {
        let mut state = self.state.write();
        state.file = Some(file);
        state.error = None;
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.state.write().description = description.into();
    }

    pub fn set_tags(&self, tags: impl Into<String>) {
        self.state.write().tags = tags.into();
    }

    /// Send the selected file. The form is cleared only after the backend
    /// accepted it.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> Result<UploadRecord> {
        let (file, description, tags) = {
            let mut state = self.state.write();
            if state.phase != PagePhase::Ready {
                return Err(AppError::Validation("Please log in to upload".to_string()));
            }
            if state.uploading {
                return Err(AppError::Validation(
                    "An upload is already in progress".to_string(),
                ));
            }
            let Some(file) = state.file.clone() else {
                let err = AppError::Validation("Please select a file".to_string());
                state.error = Some(err.to_string());
                return Err(err);
            };
            state.uploading = true;
            state.error = None;
            (
                file,
                non_empty(&state.description),
                non_empty(&state.tags),
            )
        };

        let outcome = self.api.create_upload(file, description, tags).await;

        let mut state = self.state.write();
        state.uploading = false;
        match outcome {
            Ok(record) => {
                tracing::info!(upload_id = record.id, "Upload accepted");
                state.file = None;
                state.description.clear();
                state.tags.clear();
                state.created = Some(record.clone());
                Ok(record)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Upload failed");
                if err.is_unauthorized() {
                    state.phase = PagePhase::LoginRequired;
                }
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::mock::MockApi;
    use shared::UserRole;

    fn record(id: i64) -> UploadRecord {
        UploadRecord {
            id,
            file_name: "scan.png".to_string(),
            file_type: None,
            file_size: None,
            description: None,
            tags: None,
            status: Some("pending".to_string()),
            created_at: None,
        }
    }

    fn ready_page() -> (Arc<MockApi>, UploadPage) {
        let api = Arc::new(MockApi::signed_in(UserRole::User));
        let page = UploadPage::new(api.clone());
        page.load().unwrap();
        (api, page)
    }

    #[tokio::test]
    async fn test_submit_without_file() {
        let (api, page) = ready_page();
        let err = page.submit().await.unwrap_err();
        assert_eq!(err, AppError::Validation("Please select a file".to_string()));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let (api, page) = ready_page();
        *api.upload.lock() = Ok(record(12));
        page.select_file(UploadFile::new("scan.png", vec![1u8, 2]));
        page.set_description("receipt");
        page.set_tags("finance");

        let created = page.submit().await.unwrap();
        assert_eq!(created.id, 12);

        let state = page.snapshot();
        assert!(state.file.is_none());
        assert!(state.description.is_empty());
        assert!(state.tags.is_empty());
        assert!(!state.uploading);
        assert_eq!(page.redirect(), Some(Redirect::History));
        assert_eq!(api.calls(), vec!["upload scan.png"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_form() {
        let (api, page) = ready_page();
        *api.upload.lock() = Err(AppError::Api {
            status: 413,
            message: "File too large".to_string(),
        });
        page.select_file(UploadFile::new("big.mov", vec![0u8; 8]));
        page.set_description("clip");

        assert!(page.submit().await.is_err());
        let state = page.snapshot();
        assert!(state.file.is_some());
        assert_eq!(state.description, "clip");
        assert_eq!(state.error.as_deref(), Some("File too large"));
        assert_eq!(page.redirect(), None);
    }

    #[test]
    fn test_anonymous_requires_login() {
        let page = UploadPage::new(Arc::new(MockApi::anonymous()));
        assert!(page.load().is_err());
        assert_eq!(page.redirect(), Some(Redirect::Login));
    }
}
