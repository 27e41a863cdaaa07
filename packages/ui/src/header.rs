use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};

/// Dashboard header: app name, the signed-in user (when known) and Logout.
#[component]
pub fn Header(on_logout: EventHandler<()>) -> Element {
    let session = use_session();
    let user_name = session
        .read()
        .user
        .as_ref()
        .map(|u| u.display_name().to_string());

    rsx! {
        header {
            class: "header",
            div { class: "header-brand", "Keep Notes" }
            div {
                class: "header-right",
                if let Some(name) = user_name {
                    span { class: "header-user", "{name}" }
                }
                LogoutButton {
                    class: "btn btn-outline btn-sm",
                    on_logout: move |_| on_logout.call(()),
                }
            }
        }
    }
}
