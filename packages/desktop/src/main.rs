use dioxus::prelude::*;

use ui::views::{Analytics, Batches, Home, Login, Setup, Students};
use ui::{AppShell, AuthProvider, GuardContent, RouteGuard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/setup")]
    Setup {},
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/student-management")]
        Students {},
        #[route("/batches")]
        Batches {},
        #[route("/analytics")]
        Analytics {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    // Server functions are called on the configured host (smis.toml, [server] url)
    let config = ui::load_config();
    dioxus::fullstack::set_server_url(config.server.url.leak());
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        RouteGuard {
            content: GuardContent::Static(rsx! {
                AppShell { Outlet::<Route> {} }
            }),
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
