//! Request description handed to the dispatcher.

use super::payload::{MultipartBody, Payload};
use crate::core::error::{AppError, Result};
use reqwest::Method;
use serde::Serialize;

/// An endpoint call: method, path relative to the backend origin, body and
/// extra headers. The dispatcher adds the URL origin, content type and
/// credential.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub payload: Payload,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            payload: Payload::Empty,
            headers: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| AppError::Parse(format!("Failed to encode request body: {}", e)))?;
        self.payload = Payload::Json(value);
        Ok(self)
    }

    /// Attach a multipart body.
    pub fn multipart(mut self, body: MultipartBody) -> Self {
        self.payload = Payload::Multipart(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
