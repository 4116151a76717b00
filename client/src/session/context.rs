//! # Session Context
//!
//! The one object that owns the authenticated session. It is created by
//! hydrating from a [`TokenStore`], handed (cheaply cloned) to the request
//! dispatcher and to every page, and torn down by [`SessionContext::logout`]
//! or [`SessionContext::invalidate`].
//!
//! The context never navigates. Lifecycle changes are published as
//! [`SessionEvent`]s and the UI layer decides what to do with them.

use super::token_store::TokenStore;
use crate::core::error::Result;
use async_channel::{Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use shared::{AuthResponse, UserInfo};
use std::sync::Arc;

/// Events buffered before old ones are dropped.
const EVENT_BUFFER: usize = 32;

/// Session lifecycle notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A login or signup stored a fresh credential.
    Established { user_id: i64 },
    /// The user logged out.
    LoggedOut,
    /// The backend rejected the credential; the user has to log in again.
    LoginRequired { reason: String },
}

#[derive(Debug, Default)]
struct SessionState {
    credential: Option<String>,
    user: Option<UserInfo>,
}

struct SessionInner {
    store: TokenStore,
    state: RwLock<SessionState>,
    events_tx: Sender<SessionEvent>,
    events_rx: Receiver<SessionEvent>,
}

#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .field("store", &self.inner.store)
            .finish()
    }
}

impl SessionContext {
    /// Load the credential and cached user from `store`.
    pub fn hydrate(store: TokenStore) -> Self {
        let credential = store.get();
        let user = store.user();

        tracing::debug!(
            has_credential = credential.is_some(),
            has_user = user.is_some(),
            "Session hydrated"
        );

        let (events_tx, events_rx) = async_channel::bounded(EVENT_BUFFER);
        Self {
            inner: Arc::new(SessionInner {
                store,
                state: RwLock::new(SessionState { credential, user }),
                events_tx,
                events_rx,
            }),
        }
    }

    /// A session with nowhere to persist to. Always anonymous until established.
    pub fn detached() -> Self {
        Self::hydrate(TokenStore::detached())
    }

    pub fn in_memory() -> Self {
        Self::hydrate(TokenStore::in_memory())
    }

    pub fn store(&self) -> &TokenStore {
        &self.inner.store
    }

    pub fn credential(&self) -> Option<String> {
        self.inner.state.read().credential.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.inner.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().credential.is_some()
    }

    /// Receiver for lifecycle events. Receivers share one queue: each event
    /// is delivered to exactly one of them.
    pub fn events(&self) -> Receiver<SessionEvent> {
        self.inner.events_rx.clone()
    }

    /// Store the credential and cached user from a login/signup/refresh.
    ///
    /// The cached user is overwritten wholesale. Both are persisted before
    /// the in-memory session changes; if the user cannot be stored the
    /// credential is removed again and the session is left untouched.
    pub fn establish(&self, auth: &AuthResponse) -> Result<()> {
        self.inner.store.set(&auth.access_token)?;
        if let Err(err) = self.inner.store.set_user(&auth.user) {
            tracing::error!(error = %err, "Failed to store user, discarding credential");
            if let Err(clear_err) = self.inner.store.clear() {
                tracing::warn!(error = %clear_err, "Failed to clear partial session");
            }
            return Err(err);
        }

        {
            let mut state = self.inner.state.write();
            state.credential = Some(auth.access_token.clone()).filter(|t| !t.is_empty());
            state.user = Some(auth.user.clone());
        }

        tracing::info!(
            user_id = auth.user.id,
            token = %shared::mask_token(&auth.access_token),
            "Session established"
        );
        self.publish(SessionEvent::Established {
            user_id: auth.user.id,
        });
        Ok(())
    }

    /// Replace the cached user, keeping the credential.
    pub fn update_user(&self, user: &UserInfo) -> Result<()> {
        self.inner.store.set_user(user)?;
        self.inner.state.write().user = Some(user.clone());
        Ok(())
    }

    /// Explicit logout.
    pub fn logout(&self) -> Result<()> {
        let result = self.teardown();
        tracing::info!("Logged out");
        self.publish(SessionEvent::LoggedOut);
        result
    }

    /// Drop the session after the backend rejected the credential.
    ///
    /// Always clears local state; a storage failure is logged, not returned,
    /// because the caller is already reporting the 401.
    pub fn invalidate(&self, reason: &str) {
        if let Err(e) = self.teardown() {
            tracing::error!(error = %e, "Failed to clear stored credential");
        }
        tracing::warn!(reason = %reason, "Session invalidated, login required");
        self.publish(SessionEvent::LoginRequired {
            reason: reason.to_string(),
        });
    }

    fn teardown(&self) -> Result<()> {
        {
            let mut state = self.inner.state.write();
            state.credential = None;
            state.user = None;
        }
        self.inner.store.clear()
    }

    fn publish(&self, event: SessionEvent) {
        match self.inner.events_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                // Keep the newest event: drop the oldest and retry once.
                let _ = self.inner.events_rx.try_recv();
                let _ = self.inner.events_tx.try_send(event);
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }
}
