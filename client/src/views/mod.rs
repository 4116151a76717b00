//! # View-State Reconcilers
//!
//! Page models that keep local state consistent with the backend. Every
//! page follows the same pattern:
//!
//! 1. On load, require a credential; without one the page asks for login.
//! 2. Fetch the primary resource; failure is fatal for the page.
//! 3. Mutate by confirm-then-apply: mark the page in flight, await the
//!    backend, and only then change local state. A failed mutation leaves
//!    the state as it was and sets the error banner.
//!
//! State sits behind `Arc<RwLock<_>>`. Locks are taken for synchronous
//! reads and writes only, never across an `.await`.

pub mod history;
pub mod review;
pub mod upload;
pub mod wallet;

#[cfg(test)]
pub(crate) mod mock;

pub use history::{placeholder_transactions, HistoryPage, HistoryState};
pub use review::{ReviewPanel, ReviewPhase, ReviewState};
pub use upload::{UploadPage, UploadState};
pub use wallet::{WalletPage, WalletState};

use crate::core::error::{AppError, Result};
use crate::session::SessionContext;

/// Banner text for pages opened without a session.
pub const LOGIN_REQUIRED: &str = "Please log in to continue";

/// Where a page wants the user to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    History,
}

/// Lifecycle shared by the wallet, history and upload pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Loading,
    /// No credential, or the backend rejected it. Terminal for the page.
    LoginRequired,
    Ready,
    /// The primary resource could not be loaded.
    Failed,
}

impl PagePhase {
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            PagePhase::LoginRequired => Some(Redirect::Login),
            _ => None,
        }
    }
}

/// The stored credential, or an `Unauthorized` error asking for login.
pub fn require_credential(session: &SessionContext) -> Result<String> {
    session
        .credential()
        .ok_or_else(|| AppError::Unauthorized(LOGIN_REQUIRED.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_credential() {
        let session = SessionContext::in_memory();
        assert!(require_credential(&session).unwrap_err().is_unauthorized());

        session.store().set("tok123").unwrap();
        let session = SessionContext::hydrate(session.store().clone());
        assert_eq!(require_credential(&session).unwrap(), "tok123");
    }

    #[test]
    fn test_only_login_required_redirects() {
        assert_eq!(PagePhase::LoginRequired.redirect(), Some(Redirect::Login));
        assert_eq!(PagePhase::Failed.redirect(), None);
    }
}
