//! # API Client
//!
//! The single dispatcher every façade goes through. It resolves the endpoint
//! against the configured origin, attaches the session credential, sends the
//! payload and maps the response onto [`AppError`].

use super::error_body::extract_error_message;
use super::payload::Payload;
use super::request::ApiRequest;
use super::url::{build_url, normalize_origin};
use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::session::SessionContext;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client bound to one backend origin and one session.
///
/// Cloning is cheap: the connection pool and the session are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionContext,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// No timeout is applied unless the configuration carries one.
    pub fn new(config: &ClientConfig, session: SessionContext) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: normalize_origin(&config.api_url).to_string(),
            session,
        })
    }

    /// Client with default settings pointed at `base_url`.
    pub fn with_base_url(base_url: &str, session: SessionContext) -> Result<Self> {
        let config = ClientConfig {
            api_url: base_url.to_string(),
            ..ClientConfig::default()
        };
        Self::new(&config, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn url(&self, endpoint: &str) -> String {
        build_url(&self.base_url, endpoint)
    }

    /// Send `request` and decode the success body into `T`.
    ///
    /// A 204, an empty body or a body that is not JSON decodes from `null`,
    /// so `()` and `Option<_>` targets accept them.
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let ApiRequest {
            method,
            endpoint,
            payload,
            headers: extra_headers,
        } = request;

        let url = self.url(&endpoint);
        let headers = self.build_headers(&payload, &extra_headers)?;

        tracing::debug!(
            method = %method,
            url = %url,
            headers = ?headers.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            body = payload.preview().as_deref().unwrap_or(""),
            "Dispatching request"
        );
        let start = std::time::Instant::now();

        let mut builder = self.http.request(method.clone(), &url).headers(headers);
        builder = match payload {
            Payload::Empty => builder,
            Payload::Json(value) => {
                let bytes = serde_json::to_vec(&value).map_err(|e| {
                    AppError::Parse(format!("Failed to encode request body: {}", e))
                })?;
                builder.body(bytes)
            }
            Payload::Multipart(body) => builder.multipart(body.into_form()?),
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                tracing::error!(error = %e, url = %url, "Invalid request");
                return AppError::Config(format!("Invalid request: {}", e));
            }
            tracing::error!(error = %e, url = %url, "Network error");
            AppError::Network(format!(
                "{}. Ensure backend is running at {} and CORS allows your frontend origin.",
                e, self.base_url
            ))
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to read response body");
            AppError::Network(format!(
                "{}. Ensure backend is running at {} and CORS allows your frontend origin.",
                e, self.base_url
            ))
        })?;
        let duration = start.elapsed();

        if !status.is_success() {
            let message = extract_error_message(status, &body);
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                error = %message,
                duration_ms = duration.as_millis(),
                "Request failed"
            );

            if status == StatusCode::UNAUTHORIZED {
                self.session.invalidate(&message);
                return Err(AppError::Unauthorized(message));
            }
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request succeeded"
        );

        let value = decode_success_body(status, &body);
        serde_json::from_value(value).map_err(|e| {
            tracing::error!(error = %e, url = %url, "Response parse error");
            AppError::Parse(format!("Failed to parse response: {}", e))
        })
    }

    fn build_headers(&self, payload: &Payload, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::Validation(format!("Invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::Validation(format!("Invalid header value: {}", e)))?;
            headers.append(name, value);
        }

        if payload.is_multipart() {
            // The transport writes the boundary into the content type.
            headers.remove(CONTENT_TYPE);
        } else if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        // Only the session credential is ever sent.
        headers.remove(AUTHORIZATION);
        if let Some(credential) = self.session.credential() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", credential))
                .map_err(|e| AppError::Validation(format!("Invalid credential: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

fn decode_success_body(status: StatusCode, body: &[u8]) -> Value {
    if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Success body is not JSON, treating as empty");
        Value::Null
    })
}
