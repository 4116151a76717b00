//! # Session
//!
//! Credential persistence and the explicit session lifecycle.
//!
//! ```text
//! session/
//! ├── storage.rs      - KeyValueStorage trait, memory and file backends
//! ├── token_store.rs  - Credential + cached user under fixed keys
//! └── context.rs      - SessionContext: hydrate, establish, logout, invalidate
//! ```

pub mod context;
pub mod storage;
pub mod token_store;

pub use context::{SessionContext, SessionEvent};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use token_store::{TokenStore, TOKEN_KEY, USER_KEY};
