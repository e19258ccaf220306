use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Top bar showing who is logged in.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let identity = auth.read().current().cloned();

    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-title", "SMIS" }
            if let Some(user) = identity {
                div {
                    class: "navbar-user",
                    span { class: "navbar-user-name", "{user.display_name()}" }
                    if let Some(role) = user.role.as_deref() {
                        span { class: "navbar-user-role", "{role}" }
                    }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
