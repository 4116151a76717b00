//! # Upload Endpoints
//!
//! Creating uploads (multipart) and reading them back.

use crate::core::error::{AppError, Result};
use crate::transport::url::paginated;
use crate::transport::{ApiClient, ApiRequest, MultipartBody, UploadFile};
use shared::{UploadRecord, UploadStats};

pub const DEFAULT_LIMIT: u32 = 20;

/// Multipart body for `POST /uploads/`: `file`, then `description` and
/// `tags` only when non-empty.
pub fn upload_body(
    file: UploadFile,
    description: Option<&str>,
    tags: Option<&str>,
) -> Result<MultipartBody> {
    if file.file_name.trim().is_empty() {
        return Err(AppError::Validation("Please select a file".to_string()));
    }

    Ok(MultipartBody::new()
        .file("file", file)
        .text_opt("description", description)
        .text_opt("tags", tags))
}

/// Upload a file.
#[tracing::instrument(skip(client, file, description, tags), fields(file_name = %file.file_name, size = file.len()))]
pub async fn create(
    client: &ApiClient,
    file: UploadFile,
    description: Option<&str>,
    tags: Option<&str>,
) -> Result<UploadRecord> {
    let body = upload_body(file, description, tags)?;
    let record: UploadRecord = client
        .call(ApiRequest::post("/uploads/").multipart(body))
        .await?;

    tracing::info!(upload_id = record.id, "Upload created");
    Ok(record)
}

/// The user's uploads.
pub async fn list(client: &ApiClient, limit: u32, offset: u32) -> Result<Vec<UploadRecord>> {
    let uploads: Option<Vec<UploadRecord>> = client
        .call(ApiRequest::get(paginated("/uploads/", limit, offset)))
        .await?;
    Ok(uploads.unwrap_or_default())
}

pub async fn stats(client: &ApiClient) -> Result<UploadStats> {
    let stats: Option<UploadStats> = client.call(ApiRequest::get("/uploads/stats")).await?;
    Ok(stats.unwrap_or_default())
}

pub async fn get(client: &ApiClient, upload_id: i64) -> Result<UploadRecord> {
    client
        .call(ApiRequest::get(format!("/uploads/{}", upload_id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_without_description_has_only_file() {
        let body = upload_body(UploadFile::new("a.png", vec![1u8]), None, None).unwrap();
        assert_eq!(body.field_names(), vec!["file"]);
    }

    #[test]
    fn test_body_with_all_fields() {
        let body = upload_body(
            UploadFile::new("a.png", vec![1u8]),
            Some("street scene"),
            Some("city,night"),
        )
        .unwrap();
        assert_eq!(body.field_names(), vec!["file", "description", "tags"]);
    }

    #[test]
    fn test_nameless_file_is_rejected() {
        let err = upload_body(UploadFile::new("", vec![1u8]), None, None).unwrap_err();
        assert_eq!(err, AppError::Validation("Please select a file".to_string()));
    }
}
