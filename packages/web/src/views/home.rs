use dioxus::prelude::*;
use ui::views::DashboardView;

use crate::Route;

/// `/`: the notes dashboard, for signed-in users only.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        DashboardView {
            on_sign_in_required: move |_| {
                nav.replace(Route::SignIn {});
            },
        }
    }
}
