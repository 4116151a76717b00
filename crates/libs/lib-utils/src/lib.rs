//! # Utilities Library
//!
//! Shared utility functions for environment variables, dates, and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_opt};
pub use time::{now_utc, today_iso_date};
pub use validation::{validate_email, validate_not_empty, validate_passwords_match};
