//! # Authentication Endpoints
//!
//! Login, signup, profile and token refresh. Successful login, signup and
//! refresh establish the session; logout only clears local state.

use crate::core::error::{AppError, Result};
use crate::transport::{ApiClient, ApiRequest};
use lib_utils::{validate_email, validate_not_empty, validate_passwords_match};
use shared::{AuthResponse, LoginRequest, RefreshRequest, SignupRequest, UserInfo};

/// Signup form as the user filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Check required fields, password confirmation and email shape.
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.name, "Name").map_err(AppError::Validation)?;
        validate_not_empty(&self.email, "Email").map_err(AppError::Validation)?;
        validate_not_empty(&self.password, "Password").map_err(AppError::Validation)?;
        validate_passwords_match(&self.password, &self.confirm_password)
            .map_err(AppError::Validation)?;
        validate_email(&self.email).map_err(AppError::Validation)
    }

    /// Username derived from the display name: whitespace removed, lowercased.
    pub fn username(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    }

    fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            username: self.username(),
            password: self.password.clone(),
            name: Some(self.name.clone()),
        }
    }
}

/// Check login inputs before anything is sent.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    validate_not_empty(email, "Email").map_err(AppError::Validation)?;
    validate_not_empty(password, "Password").map_err(AppError::Validation)?;
    validate_email(email).map_err(AppError::Validation)
}

/// Sign up a new user and establish the session.
#[tracing::instrument(skip(client, form), fields(email = %form.email))]
pub async fn signup(client: &ApiClient, form: &SignupForm) -> Result<AuthResponse> {
    form.validate()?;
    tracing::info!("Attempting signup");

    let request = ApiRequest::post("/auth/signup").json(&form.to_request())?;
    let auth: AuthResponse = client.call(request).await?;
    client.session().establish(&auth)?;

    tracing::info!(user_id = auth.user.id, "Signup successful");
    Ok(auth)
}

/// Login with email and password and establish the session.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    validate_login(email, password)?;
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = ApiRequest::post("/auth/login").json(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })?;
    let auth: AuthResponse = client.call(request).await?;
    client.session().establish(&auth)?;

    tracing::info!(
        user_id = auth.user.id,
        duration_ms = start.elapsed().as_millis(),
        "Login successful"
    );
    Ok(auth)
}

/// Profile of the authenticated user.
pub async fn me(client: &ApiClient) -> Result<UserInfo> {
    client.call(ApiRequest::get("/auth/me")).await
}

/// Exchange a refresh token for a new credential.
#[tracing::instrument(skip_all)]
pub async fn refresh(client: &ApiClient, refresh_token: &str) -> Result<AuthResponse> {
    validate_not_empty(refresh_token, "Refresh token").map_err(AppError::Validation)?;

    let request = ApiRequest::post("/auth/refresh").json(&RefreshRequest {
        refresh_token: refresh_token.to_string(),
    })?;
    let auth: AuthResponse = client.call(request).await?;
    client.session().establish(&auth)?;

    tracing::info!(user_id = auth.user.id, "Session refreshed");
    Ok(auth)
}

/// Forget the credential and cached user. No request is made.
pub fn logout(client: &ApiClient) -> Result<()> {
    client.session().logout()
}
