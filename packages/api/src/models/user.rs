//! # Auth request and response bodies
//!
//! The backend names its fields after its own collections (`user_name`,
//! `user_email`, ...). These structs match that JSON exactly:
//!
//! - [`SignUpRequest`]: body of `POST /auth/signup`.
//! - [`SignInRequest`]: body of `POST /auth/signin`.
//! - [`TokenResponse`]: `{access_token, token_type, user?}` returned by sign-in.
//!   `user` is not sent by every backend version, so it is optional.
//! - [`UserResponse`]: the account returned by sign-up. The
//!   [`UserResponse::to_summary`] method projects it into a [`UserSummary`],
//!   dropping the timestamp the client has no use for.

use serde::{Deserialize, Serialize};
use store::UserSummary;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignUpRequest {
    pub user_name: String,
    pub user_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignInRequest {
    pub user_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<UserResponse>,
}

/// Account as returned by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserResponse {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
}

impl UserResponse {
    /// Convert to the client-side user type.
    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.user_id.clone(),
            name: self.user_name.clone(),
            email: self.user_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_body_field_names() {
        let body = serde_json::to_value(SignUpRequest {
            user_name: "Test User".to_string(),
            user_email: "test@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "user_name": "Test User",
                "user_email": "test@example.com",
                "password": "secret123",
            })
        );
    }

    #[test]
    fn test_token_response_without_user() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.user.is_none());
    }

    #[test]
    fn test_user_response_ignores_extra_fields() {
        let user: UserResponse = serde_json::from_str(
            r#"{"user_id":"u1","user_name":"Ada","user_email":"ada@example.com","created_on":"2024-01-05T09:30:00"}"#,
        )
        .unwrap();
        assert_eq!(user.to_summary().display_name(), "Ada");
    }
}
