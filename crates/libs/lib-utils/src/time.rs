//! # Time Utilities
//!
//! Date helpers for locally created ledger entries.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's UTC date as `YYYY-MM-DD`, the format transaction records use.
pub fn today_iso_date() -> String {
    now_utc().format("%Y-%m-%d").to_string()
}
