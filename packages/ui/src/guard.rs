//! Gate for views that need a signed-in user.

use dioxus::prelude::*;
use store::{AuthStatus, RouteGuard};

use crate::auth::use_session;
use crate::client::use_client;

/// Renders `children` only when a session token is persisted.
///
/// The guard runs once per mount. Without a token the session is logged out
/// and `on_redirect` fires exactly once; the caller navigates to sign-in.
#[component]
pub fn ProtectedRoute(on_redirect: EventHandler<()>, children: Element) -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut status = use_signal(|| Option::<AuthStatus>::None);

    use_effect(move || {
        let result = RouteGuard::check(&mut session.write(), client.tokens(), &mut || {
            on_redirect.call(())
        });
        status.set(Some(result));
    });

    match status() {
        Some(AuthStatus::Authenticated) => rsx! {
            {children}
        },
        _ => rsx! {},
    }
}
