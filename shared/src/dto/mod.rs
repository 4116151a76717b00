//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the marketplace backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - `/auth/*`: signup, login, refresh, current user
//! - [`upload`] - `/uploads/*`: upload records and statistics
//! - [`review`] - `/reviews/*`: moderation actions
//! - [`wallet`] - `/wallet/*`: balance, transactions, withdrawals
//! - [`user`] - `/users/*`: profile updates
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! { "email": "alice@example.com", "password": "MyPassword123!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer",
//!   "user": { "id": 1, "name": "Alice", "email": "alice@example.com", "role": "user" }
//! }
//! ```

pub mod auth;
pub mod review;
pub mod upload;
pub mod user;
pub mod wallet;

mod lenient;

pub use auth::*;
pub use review::*;
pub use upload::*;
pub use user::*;
pub use wallet::*;
