//! Registration form shared by platform packages.

use api::{Operation, SignUp};
use dioxus::prelude::*;
use store::validation;

use crate::client::{use_client, use_config};
use crate::pending::try_begin;
use crate::report::report_error;

/// Name/email/password registration. Does not sign the user in; on success
/// `on_signed_up` fires so the caller can move on to sign-in.
#[component]
pub fn SignUpView(
    on_signed_up: EventHandler<()>,
    /// Called from the "Sign in" link.
    on_navigate_sign_in: EventHandler<()>,
) -> Element {
    let client = use_client();
    let config = use_config();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let n = name().trim().to_string();
        let e = email().trim().to_string();
        let p = password();
        let cp = confirm_password();

        if let Err(invalid) = validation::sign_up(&n, &e, &p, &cp) {
            error.set(Some(invalid.to_string()));
            return;
        }
        if !loading.with_mut(try_begin) {
            return;
        }

        let client = client.clone();
        let surfaces = config.errors.clone();
        let form = SignUp {
            name: n,
            email: e,
            password: p,
        };
        spawn(async move {
            match client.auth().sign_up(form).await {
                Ok(user) => {
                    tracing::info!("Registered {}", user.email);
                    loading.set(false);
                    on_signed_up.call(());
                }
                Err(err) => {
                    tracing::warn!("Sign up failed: {}", err);
                    loading.set(false);
                    report_error(Operation::SignUp, &err, &surfaces, |msg| {
                        error.set(Some(msg))
                    });
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Sign up for Keep Notes" }

            form {
                class: "auth-form",
                onsubmit: handle_sign_up,

                if let Some(err) = error() {
                    div { class: "error-banner", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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

                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                a {
                    href: "/signin",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate_sign_in.call(());
                    },
                    "Sign in"
                }
            }
        }
    }
}
