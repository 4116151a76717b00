//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    match get_env(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

/// Get and parse an optional environment variable.
///
/// Unset or blank values are `Ok(None)`; values that fail to parse are errors.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env(name) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::WrongFormat(name)),
        Err(_) => Ok(None),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "Missing environment variable {name}"),
            Error::WrongFormat(name) => write!(fmt, "Environment variable {name} has an invalid value"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_reports_name() {
        let err = get_env("LIB_UTILS_TEST_SURELY_UNSET").unwrap_err();
        assert_eq!(err, Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET"));
    }

    #[test]
    fn test_get_env_or_falls_back() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_SURELY_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_display_names_variable() {
        assert_eq!(
            Error::WrongFormat("ALIGNERR_REQUEST_TIMEOUT_SECS").to_string(),
            "Environment variable ALIGNERR_REQUEST_TIMEOUT_SECS has an invalid value"
        );
    }

    #[test]
    fn test_parse_opt_unset_is_none() {
        let parsed: Option<u64> = get_env_parse_opt("LIB_UTILS_TEST_SURELY_UNSET").unwrap();
        assert_eq!(parsed, None);
    }
}
