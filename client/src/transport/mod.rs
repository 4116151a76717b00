//! # Request Dispatcher
//!
//! One transport for every backend call, parameterized by payload kind.
//!
//! ## Module Structure
//!
//! ```text
//! transport/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient: headers, send, response mapping
//! ├── request.rs     - ApiRequest builder
//! ├── payload.rs     - Empty / JSON / multipart bodies
//! ├── error_body.rs  - Error message extraction from failed responses
//! └── url.rs         - Origin + endpoint joining
//! ```

pub mod client;
pub mod error_body;
pub mod payload;
pub mod request;
pub mod url;

pub use client::ApiClient;
pub use payload::{MultipartBody, MultipartField, Payload, UploadFile};
pub use request::ApiRequest;
