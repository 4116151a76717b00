//! # User Endpoints

use crate::core::error::{AppError, Result};
use crate::transport::{ApiClient, ApiRequest};
use shared::{UpdateProfileRequest, UserInfo};

/// Same resource as [`super::auth::me`].
pub async fn profile(client: &ApiClient) -> Result<UserInfo> {
    super::auth::me(client).await
}

/// Update profile fields and replace the cached user with the result.
#[tracing::instrument(skip_all)]
pub async fn update_profile(client: &ApiClient, update: &UpdateProfileRequest) -> Result<UserInfo> {
    if update.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }

    let user: UserInfo = client
        .call(ApiRequest::put("/users/me").json(update)?)
        .await?;
    client.session().update_user(&user)?;

    tracing::info!(user_id = user.id, "Profile updated");
    Ok(user)
}
