//! # Alignerr Client - Library Root
//!
//! Session and request-authorization layer for the Alignerr micro-work
//! marketplace. Contributors upload files for review, admins approve or
//! reject them, and approved work credits a wallet that can be withdrawn.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  views      - page models (review, wallet, history, ...) │
//! ├──────────────────────────────────────────────────────────┤
//! │  api        - one façade per resource group              │
//! ├──────────────────────────────────────────────────────────┤
//! │  transport  - the single dispatcher (ApiClient)          │
//! ├──────────────────────────────────────────────────────────┤
//! │  session    - SessionContext over a persistent TokenStore│
//! └──────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON, multipart)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Session Flow
//!
//! 1. [`SessionContext::hydrate`] loads the stored credential.
//! 2. Every request through [`ApiClient`] carries `Authorization: Bearer <credential>`
//!    when one exists.
//! 3. A 401 from any endpoint clears the store and publishes
//!    [`SessionEvent::LoginRequired`]; the caller gets [`AppError::Unauthorized`].
//!
//! ```rust,no_run
//! use client::{api, ApiClient, ClientConfig, SessionContext};
//!
//! # async fn run() -> client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let session = SessionContext::in_memory();
//! let client = ApiClient::new(&config, session)?;
//!
//! api::auth::login(&client, "ada@example.com", "hunter22").await?;
//! let wallet = api::wallet::get(&client).await?;
//! println!("{}", shared::format_balance(wallet.current_balance));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod debug;
pub mod session;
pub mod transport;
pub mod views;

pub use config::ClientConfig;
pub use crate::core::error::{AppError, Result};
pub use crate::core::service::ApiService;
pub use session::{SessionContext, SessionEvent, TokenStore};
pub use transport::ApiClient;
