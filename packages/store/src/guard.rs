//! Route guard for protected views.
//!
//! Two states, [`AuthStatus::Unauthenticated`] and [`AuthStatus::Authenticated`],
//! re-evaluated every time a protected view mounts. A missing token is not an
//! error: the guard logs the session out and redirects to sign-in, once.

use crate::session::{AuthStatus, SessionAction, SessionState};
use crate::token::TokenStore;

/// Navigation side effect performed when the guard rejects a mount.
pub trait Redirect {
    fn to_sign_in(&mut self);
}

impl<F: FnMut()> Redirect for F {
    fn to_sign_in(&mut self) {
        self()
    }
}

pub struct RouteGuard;

impl RouteGuard {
    /// Evaluate the guard for one mount of a protected view.
    ///
    /// A persisted token moves the session to `Authenticated` (keeping any user
    /// already known); no token moves it to `Unauthenticated` and triggers
    /// exactly one redirect.
    pub fn check<T, R>(session: &mut SessionState, tokens: &T, redirect: &mut R) -> AuthStatus
    where
        T: TokenStore + ?Sized,
        R: Redirect + ?Sized,
    {
        match tokens.get() {
            Some(token) => {
                let user = session.user.take();
                session.apply(SessionAction::SetCredentials { token, user });
                AuthStatus::Authenticated
            }
            None => {
                tracing::debug!("No session token, redirecting to sign-in");
                session.apply(SessionAction::Logout);
                redirect.to_sign_in();
                AuthStatus::Unauthenticated
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTokenStore;
    use crate::models::UserSummary;

    #[derive(Default)]
    struct Recorder {
        redirects: usize,
    }

    impl Redirect for Recorder {
        fn to_sign_in(&mut self) {
            self.redirects += 1;
        }
    }

    #[test]
    fn test_absent_token_redirects_once_per_mount() {
        let tokens = MemoryTokenStore::new();
        let mut session = SessionState::new();
        let mut nav = Recorder::default();

        let status = RouteGuard::check(&mut session, &tokens, &mut nav);
        assert_eq!(status, AuthStatus::Unauthenticated);
        assert_eq!(nav.redirects, 1);

        // A second mount is a second evaluation
        RouteGuard::check(&mut session, &tokens, &mut nav);
        assert_eq!(nav.redirects, 2);
    }

    #[test]
    fn test_present_token_never_redirects() {
        let tokens = MemoryTokenStore::with_token("tok");
        let mut session = SessionState::new();
        let mut nav = Recorder::default();

        let status = RouteGuard::check(&mut session, &tokens, &mut nav);
        assert_eq!(status, AuthStatus::Authenticated);
        assert_eq!(nav.redirects, 0);
        assert_eq!(session.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_keeps_known_user() {
        let tokens = MemoryTokenStore::with_token("tok");
        let mut session = SessionState::new();
        session.user = Some(UserSummary {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });

        RouteGuard::check(&mut session, &tokens, &mut || {});
        assert!(session.user.is_some());
    }

    #[test]
    fn test_token_removed_between_mounts() {
        let tokens = MemoryTokenStore::with_token("tok");
        let mut session = SessionState::new();
        let mut redirects = 0;

        RouteGuard::check(&mut session, &tokens, &mut || redirects += 1);
        tokens.clear();
        let status = RouteGuard::check(&mut session, &tokens, &mut || redirects += 1);

        assert_eq!(status, AuthStatus::Unauthenticated);
        assert_eq!(redirects, 1);
        assert!(session.token.is_none());
    }
}
