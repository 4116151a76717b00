use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
///
/// The display name travels as `name`, the property the backend's user
/// schema expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Refresh request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Authentication response (login/signup/refresh success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Role attached to an account.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    /// Any role this client does not know about. Never grants admin access.
    #[serde(other)]
    Unknown,
}

/// User information, also cached next to the credential for fast rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default, alias = "full_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Name to greet the user with: display name, then username, then email.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_omits_missing_name() {
        let req = SignupRequest {
            email: "a@b.co".to_string(),
            username: "alice".to_string(),
            password: "pw".to_string(),
            name: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_unknown_role_is_not_admin() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id": 3, "email": "m@x.io", "role": "moderator"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Unknown);
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "m@x.io");
    }

    #[test]
    fn test_auth_response_minimal_shape() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"access_token": "tok", "user": {"id": 1, "email": "a@b.co", "full_name": "Alice", "role": "admin"}}"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "tok");
        assert!(resp.user.is_admin());
        assert_eq!(resp.user.display_name(), "Alice");
        assert!(resp.refresh_token.is_none());
    }
}
