use dioxus::prelude::*;

use crate::auth::use_auth;

/// Page body for screens whose content lives elsewhere.
#[component]
pub fn Placeholder(title: String, description: String) -> Element {
    let auth = use_auth();
    let name = auth
        .read()
        .current()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "placeholder",
            h2 { class: "placeholder-title", "{title}" }
            p { class: "placeholder-text", "{description}" }
            if !name.is_empty() {
                p { class: "placeholder-user", "Signed in as {name}" }
            }
        }
    }
}
