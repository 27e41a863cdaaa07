//! Session state: the bearer token and the signed-in user.
//!
//! The token here mirrors what the [`TokenStore`](crate::TokenStore) holds; the
//! service layer persists it, this state only tracks it for rendering. There is
//! no expiry tracking, a stale token surfaces as an `Unauthorized` API error.

use crate::models::UserSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    SetCredentials {
        token: String,
        user: Option<UserSummary>,
    },
    Logout,
    SetLoading(bool),
    SetError(Option<String>),
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> AuthStatus {
        match self.token {
            Some(_) => AuthStatus::Authenticated,
            None => AuthStatus::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetCredentials { token, user } => {
                self.token = Some(token);
                self.user = user;
                self.loading = false;
                self.error = None;
            }
            SessionAction::Logout => {
                self.token = None;
                self.user = None;
                self.loading = false;
                self.error = None;
            }
            SessionAction::SetLoading(loading) => {
                self.loading = loading;
            }
            SessionAction::SetError(error) => {
                self.error = error;
                self.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserSummary {
        UserSummary {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_credentials_then_logout() {
        let mut session = SessionState::new();
        assert_eq!(session.status(), AuthStatus::Unauthenticated);

        session.apply(SessionAction::SetCredentials {
            token: "tok".to_string(),
            user: Some(user()),
        });
        assert!(session.is_authenticated());
        assert_eq!(session.user, Some(user()));

        session.apply(SessionAction::Logout);
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_error_clears_loading() {
        let mut session = SessionState::new();
        session.apply(SessionAction::SetLoading(true));
        session.apply(SessionAction::SetError(Some("Sign in failed".to_string())));
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some("Sign in failed"));
    }

    #[test]
    fn test_credentials_clear_previous_error() {
        let mut session = SessionState::new();
        session.apply(SessionAction::SetError(Some("bad".to_string())));
        session.apply(SessionAction::SetCredentials {
            token: "tok".to_string(),
            user: None,
        });
        assert!(session.error.is_none());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_failed_sign_in_only_clears_loading() {
        let mut session = SessionState::new();
        session.apply(SessionAction::SetLoading(true));
        session.apply(SessionAction::SetLoading(false));
        assert_eq!(session, SessionState::default());
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }
}
