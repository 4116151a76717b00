//! # Request Payloads
//!
//! What a request carries. The dispatcher picks headers by payload kind:
//! JSON bodies (and bodiless requests) get `Content-Type: application/json`,
//! multipart bodies leave the content type to the HTTP client so it can add
//! the boundary.

use crate::core::error::{AppError, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// A file held in memory, ready to be sent as a multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Read a file from disk, naming the part after the file.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::Validation(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            content_type: guess_content_type(path).map(str::to_string),
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mime)
}

/// One field of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartField {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

impl MultipartField {
    pub fn name(&self) -> &str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => name,
        }
    }
}

/// Inspectable multipart body, turned into a [`Form`] only when sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    fields: Vec<MultipartField>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MultipartField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a text field only when `value` is present and non-empty.
    pub fn text_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.text(name, v),
            _ => self,
        }
    }

    pub fn file(mut self, name: impl Into<String>, file: UploadFile) -> Self {
        self.fields.push(MultipartField::File {
            name: name.into(),
            file,
        });
        self
    }

    pub fn fields(&self) -> &[MultipartField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(MultipartField::name).collect()
    }

    pub(crate) fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for field in self.fields {
            form = match field {
                MultipartField::Text { name, value } => form.text(name, value),
                MultipartField::File { name, file } => {
                    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                    if let Some(content_type) = file.content_type {
                        part = part.mime_str(&content_type).map_err(|e| {
                            AppError::Validation(format!("Invalid content type {}: {}", content_type, e))
                        })?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

impl Payload {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }

    /// First 200 characters of the body, for debug logs.
    pub fn preview(&self) -> Option<String> {
        match self {
            Payload::Empty => None,
            Payload::Json(value) => Some(value.to_string().chars().take(200).collect()),
            Payload::Multipart(body) => Some(format!("multipart fields {:?}", body.field_names())),
        }
    }
}
