//! Initial account setup.

use dioxus::prelude::*;

/// Creates the default accounts on the server and reports what happened.
#[component]
pub fn SetupPanel() -> Element {
    let mut status = use_signal(String::new);
    let mut running = use_signal(|| false);

    let handle_setup = move |_| {
        running.set(true);
        status.set("Setting up users...".to_string());
        spawn(async move {
            match api::setup_users().await {
                Ok(report) => {
                    status.set(format!(
                        "Setup completed: {} created, {} already present. You can now go to the login page.",
                        report.created.len(),
                        report.existing.len()
                    ));
                }
                Err(e) => {
                    tracing::error!("Setup failed: {}", e);
                    status.set(format!("Error during setup: {e}"));
                }
            }
            running.set(false);
        });
    };

    rsx! {
        div {
            class: "setup-panel",
            h1 { "SMIS Initial Setup" }
            p { "This page will create the initial users in the system." }
            button {
                class: "login-submit",
                disabled: running(),
                onclick: handle_setup,
                if running() { "Setting up..." } else { "Start Setup" }
            }
            if !status().is_empty() {
                p { class: "setup-status", "{status}" }
            }
        }
    }
}
