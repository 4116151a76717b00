//! # Core Abstractions
//!
//! Error types and the service trait the pages depend on.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: `ApiService`, implemented by the HTTP client and by test mocks
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use client::core::ApiService;
//! use client::session::SessionContext;
//! use client::transport::ApiClient;
//!
//! let session = SessionContext::in_memory();
//! let api: Arc<dyn ApiService> =
//!     Arc::new(ApiClient::with_base_url("http://localhost:8000", session).unwrap());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
