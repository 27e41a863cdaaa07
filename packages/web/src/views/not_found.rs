use dioxus::prelude::*;

use crate::Route;

/// Unknown paths go back to the dashboard, which redirects to sign-in when
/// needed.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
