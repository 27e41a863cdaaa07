//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{ClientConfig, NotesState, SessionAction, SessionState, TokenStore};

use crate::client::{make_client, use_client, Client};
use crate::notes::use_notes;

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the API client, the config, the session and
/// the notes store. Wrap your app with this component; everything lives for
/// the lifetime of the app and is only reset by signing out.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let client: Client = use_context_provider({
        let config = config.clone();
        move || make_client(&config)
    });
    use_context_provider(move || config);

    // Initial state comes from whatever a previous session persisted
    let session = use_signal(|| {
        let mut state = SessionState::new();
        if let Some(token) = client.tokens().get() {
            tracing::debug!("Restored persisted session token");
            state.apply(SessionAction::SetCredentials { token, user: None });
        }
        state
    });
    use_context_provider(|| session);

    let notes = use_signal(NotesState::new);
    use_context_provider(|| notes);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
///
/// Clears the persisted token, then the session and notes stores, then calls
/// `on_logout` so the caller can navigate to sign-in.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut notes = use_notes();

    let onclick = move |_| {
        client.auth().sign_out();
        session.write().apply(SessionAction::Logout);
        notes.write().reset();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
