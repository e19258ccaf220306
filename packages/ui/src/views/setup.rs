use dioxus::prelude::*;

use crate::setup::SetupPanel;

/// Setup page component.
#[component]
pub fn Setup() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::SMIS_CSS }
        div {
            class: "login-container",
            div { class: "login-card", SetupPanel {} }
        }
    }
}
