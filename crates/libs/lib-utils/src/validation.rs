//! # Validation Utilities
//!
//! Input validation helpers shared by the login, signup, and wallet forms.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format.
///
/// Accepts `local@domain.tld` shapes: no whitespace, exactly one `@`, a
/// non-empty local part, and a domain containing a dot with characters on
/// both sides of it.
pub fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || Err("Please enter a valid email".to_string());

    if email.chars().any(char::is_whitespace) {
        return invalid();
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };

    if local.is_empty() || domain.contains('@') {
        return invalid();
    }

    let has_inner_dot = domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len());

    if has_inner_dot {
        Ok(())
    } else {
        invalid()
    }
}

/// Validate that a password and its confirmation match.
pub fn validate_passwords_match(password: &str, confirmation: &str) -> Result<(), String> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match".to_string())
    }
}
