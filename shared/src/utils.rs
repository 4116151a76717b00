//! # Shared Utility Functions
//!
//! Display helpers used by the client's pages and logs.
//!
//! - [`format_amount`] - Signed currency rendering for ledger rows
//! - [`format_balance`] - Unsigned currency rendering for balances
//! - [`mask_token`] - Shorten a bearer credential so it can be logged
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_amount, mask_token};
//!
//! assert_eq!(format_amount(-40.0), "-₹40.00");
//! assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload.sig"), "eyJh...sig");
//! ```

/// Currency symbol the marketplace pays out in.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a signed ledger amount, e.g. `+₹15.50` or `-₹200.00`.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "+" };
    format!("{}{}{:.2}", sign, CURRENCY_SYMBOL, amount.abs())
}

/// Format a balance, e.g. `₹60.00`.
pub fn format_balance(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Mask a credential for logging, keeping the first 4 and last 3 characters.
///
/// Credentials too short to mask meaningfully are replaced entirely.
pub fn mask_token(token: &str) -> String {
    const PREFIX_LEN: usize = 4;
    const SUFFIX_LEN: usize = 3;

    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= PREFIX_LEN + SUFFIX_LEN {
        return "***".to_string();
    }

    let prefix: String = chars[..PREFIX_LEN].iter().collect();
    let suffix: String = chars[chars.len() - SUFFIX_LEN..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
