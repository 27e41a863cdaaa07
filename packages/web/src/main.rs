use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{Home, NotFound, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::load();
        tracing::info!("Using backend at {}", config.api.base_url);
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
