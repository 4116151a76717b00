//! # Token Store
//!
//! Persists the bearer credential and the cached user profile under fixed
//! keys. A store without a storage backend (server-side or headless
//! execution) reports absence from every read and ignores writes, so callers
//! never have to special-case it.
//!
//! No expiry is tracked here: a stale credential is only discovered when the
//! backend answers 401.

use super::storage::{KeyValueStorage, MemoryStorage};
use crate::core::error::{AppError, Result};
use shared::UserInfo;
use std::sync::Arc;

/// Storage key of the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-serialized cached user.
pub const USER_KEY: &str = "user";

#[derive(Clone)]
pub struct TokenStore {
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Store backed by a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store with no backend at all.
    pub fn detached() -> Self {
        Self { storage: None }
    }

    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }

    /// The stored credential, or `None` when absent, empty, or unreadable.
    pub fn get(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read credential, treating as absent");
                None
            }
        }
    }

    pub fn set(&self, credential: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.set_item(TOKEN_KEY, credential),
            None => Ok(()),
        }
    }

    /// The cached user, or `None` when absent or not decodable.
    pub fn user(&self) -> Option<UserInfo> {
        let storage = self.storage.as_ref()?;
        let raw = match storage.get_item(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cached user");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Cached user is not valid JSON, ignoring");
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserInfo) -> Result<()> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        let raw = serde_json::to_string(user)
            .map_err(|e| AppError::Storage(format!("Failed to encode user: {}", e)))?;
        storage.set_item(USER_KEY, &raw)
    }

    /// Remove both the credential and the cached user.
    ///
    /// Both removals are attempted even if the first fails.
    pub fn clear(&self) -> Result<()> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        let token = storage.remove_item(TOKEN_KEY);
        let user = storage.remove_item(USER_KEY);
        token.and(user)
    }
}
