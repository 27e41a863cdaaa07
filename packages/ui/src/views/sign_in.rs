//! Sign-in form shared by platform packages.

use api::{Operation, SignIn};
use dioxus::prelude::*;
use store::{validation, SessionAction};

use crate::auth::use_session;
use crate::client::{use_client, use_config};
use crate::pending::try_begin;
use crate::report::report_error;

/// Email/password sign-in.
///
/// On success the token is persisted, the session holds the credentials and
/// `on_signed_in` fires. A visitor who is already signed in is sent straight
/// on through `on_signed_in`.
#[component]
pub fn SignInView(
    /// Called once the user is signed in, navigate to the dashboard.
    on_signed_in: EventHandler<()>,
    /// Called from the "Sign up" link.
    on_navigate_sign_up: EventHandler<()>,
) -> Element {
    let client = use_client();
    let config = use_config();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if session.peek().is_authenticated() {
            on_signed_in.call(());
        }
    });

    let loading = session.read().loading;

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let e = email().trim().to_string();
        let p = password();
        if let Err(invalid) = validation::sign_in(&e, &p) {
            error.set(Some(invalid.to_string()));
            return;
        }
        if !session.with_mut(|s| try_begin(&mut s.loading)) {
            return;
        }

        let client = client.clone();
        let surfaces = config.errors.clone();
        spawn(async move {
            match client.auth().sign_in(SignIn { email: e, password: p }).await {
                Ok(signed_in) => {
                    tracing::info!("Signed in");
                    session.write().apply(SessionAction::SetCredentials {
                        token: signed_in.token,
                        user: signed_in.user,
                    });
                    on_signed_in.call(());
                }
                Err(err) => {
                    tracing::warn!("Sign in failed: {}", err);
                    session.write().apply(SessionAction::SetLoading(false));
                    report_error(Operation::SignIn, &err, &surfaces, |msg| {
                        error.set(Some(msg))
                    });
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Sign In" }
            p { class: "auth-subtitle", "Welcome back to Keep Notes" }

            form {
                class: "auth-form",
                onsubmit: handle_sign_in,

                if let Some(err) = error() {
                    div { class: "error-banner", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                a {
                    href: "/signup",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate_sign_up.call(());
                    },
                    "Sign up"
                }
            }
        }
    }
}
