//! URL construction for backend endpoints.

/// Strip trailing slashes from a backend origin.
pub fn normalize_origin(origin: &str) -> &str {
    origin.trim_end_matches('/')
}

/// Join `origin` and `endpoint` with exactly one slash.
///
/// Trailing slashes on the endpoint are kept: `/uploads/` and `/uploads`
/// are different routes on the backend. Applying the function to its own
/// output with an empty endpoint prefix changes nothing.
///
/// ```rust
/// use client::transport::url::build_url;
///
/// assert_eq!(build_url("http://localhost:8000/", "wallet/"), "http://localhost:8000/wallet/");
/// assert_eq!(build_url("http://localhost:8000", "//auth/me"), "http://localhost:8000/auth/me");
/// ```
pub fn build_url(origin: &str, endpoint: &str) -> String {
    let base = normalize_origin(origin);
    let path = endpoint.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Endpoint with `limit`/`offset` pagination.
pub fn paginated(path: &str, limit: u32, offset: u32) -> String {
    format!("{}?limit={}&offset={}", path, limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_slash_combinations() {
        let expected = "http://localhost:8000/auth/login";
        for origin in ["http://localhost:8000", "http://localhost:8000/", "http://localhost:8000///"] {
            for endpoint in ["auth/login", "/auth/login", "///auth/login"] {
                assert_eq!(build_url(origin, endpoint), expected);
            }
        }
    }

    #[test]
    fn test_normalization_is_stable() {
        let origin = "https://api.example.com//";
        assert_eq!(normalize_origin(normalize_origin(origin)), normalize_origin(origin));

        let once = build_url(origin, "//wallet/");
        let twice = build_url(normalize_origin(origin), "/wallet/");
        assert_eq!(once, twice);
        assert_eq!(once, "https://api.example.com/wallet/");
    }

    #[test]
    fn test_keeps_endpoint_trailing_slash_and_query() {
        assert_eq!(
            build_url("http://h", &paginated("/uploads/", 20, 0)),
            "http://h/uploads/?limit=20&offset=0"
        );
    }
}
