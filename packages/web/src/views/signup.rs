use dioxus::prelude::*;
use ui::views::SignUpView;

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let nav = use_navigator();

    rsx! {
        SignUpView {
            on_signed_up: move |_| {
                nav.push(Route::SignIn {});
            },
            on_navigate_sign_in: move |_| {
                nav.push(Route::SignIn {});
            },
        }
    }
}
