use dioxus::prelude::*;
use ui::views::SignInView;

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let nav = use_navigator();

    rsx! {
        SignInView {
            on_signed_in: move |_| {
                nav.replace(Route::Home {});
            },
            on_navigate_sign_up: move |_| {
                nav.push(Route::SignUp {});
            },
        }
    }
}
