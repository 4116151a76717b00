//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Alignerr client and the
//! marketplace REST backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, signup, refresh, and the cached user profile
//!   - **[`dto::upload`]**: Upload records, review-queue summaries, statistics
//!   - **[`dto::review`]**: Approve/reject bodies and review records
//!   - **[`dto::wallet`]**: Wallet snapshot, transactions, withdrawals
//!   - **[`dto::user`]**: Profile updates
//! - **[`utils`]**: Display helpers (amounts, token masking)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case**, matching the backend's schemas
//! - Optional request fields are omitted when `None`
//! - Response structs tolerate missing fields with `#[serde(default)]` so a
//!   partially populated payload still renders
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"email":"alice@example.com","password":"secret"}"#);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
