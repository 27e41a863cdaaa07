//! Sign-up, sign-in and sign-out against `/auth`.
//!
//! Sign-in is the only call with a side effect on the client: on success the
//! returned bearer token is written to the [`TokenStore`]. Sign-out is local,
//! it just clears that token. There is no refresh.

use reqwest::Method;
use store::{TokenStore, UserSummary};

use crate::client::ApiClient;
use crate::error::{ApiError, ErrorKind, Operation};
use crate::models::{SignInRequest, SignUpRequest, TokenResponse, UserResponse};

/// Sign-up form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-in form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

/// Result of a successful sign-in. The token has already been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub token: String,
    pub user: Option<UserSummary>,
}

pub struct AuthService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: TokenStore> AuthService<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Create an account. Does not sign in.
    pub async fn sign_up(&self, form: SignUp) -> Result<UserSummary, ApiError> {
        let op = Operation::SignUp;
        let body = SignUpRequest {
            user_name: form.name,
            user_email: form.email,
            password: form.password,
        };
        let request = self
            .client
            .request(op, Method::POST, &["auth", "signup"])?
            .json(&body);
        let user: UserResponse = self.client.fetch(op, request).await?;
        tracing::info!("Registered account {}", user.user_email);
        Ok(user.to_summary())
    }

    /// Exchange credentials for a bearer token and persist it.
    pub async fn sign_in(&self, form: SignIn) -> Result<SignedIn, ApiError> {
        let op = Operation::SignIn;
        let body = SignInRequest {
            user_email: form.email,
            password: form.password,
        };
        let request = self
            .client
            .request(op, Method::POST, &["auth", "signin"])?
            .json(&body);
        let response: TokenResponse = self.client.fetch(op, request).await?;

        if response.access_token.is_empty() {
            tracing::error!("Sign-in response carried no access token");
            return Err(ApiError::new(ErrorKind::Server, op.fallback_message()));
        }

        self.client.tokens().set(&response.access_token);
        tracing::info!("Signed in as {}", body.user_email);
        Ok(SignedIn {
            token: response.access_token,
            user: response.user.as_ref().map(UserResponse::to_summary),
        })
    }

    /// Forget the persisted token.
    pub fn sign_out(&self) {
        self.client.tokens().clear();
        tracing::info!("Signed out");
    }

    /// The persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.client.tokens().get()
    }
}
