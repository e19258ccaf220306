//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use identity::{IdentityContext, SessionPersistence, SmisConfig};

use crate::storage::{load_config, make_storage, PlatformStorage};

/// The identity context as held by the UI.
pub type SessionContext = IdentityContext<PlatformStorage>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<SessionContext> {
    use_context::<Signal<SessionContext>>()
}

/// Configuration provided by [`AuthProvider`].
pub fn use_config() -> SmisConfig {
    use_context::<SmisConfig>()
}

/// Provider component that owns the process-wide identity context.
/// Wrap your app with this component to enable authentication.
///
/// The context starts unrestored so the server and the browser render the same
/// first frame; the stored session is read once, after mount, on the client.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);

    let mut auth = use_context_provider(|| {
        let persistence =
            SessionPersistence::new(make_storage(), config.session.storage_key.clone());
        Signal::new(SessionContext::pending(persistence, config.auth.home_path.clone()))
    });

    // Effects never run during server rendering.
    use_effect(move || {
        if !auth.peek().is_restored() {
            auth.write().restore();
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Guards re-evaluate on the state change and send the user to the login page.
/// If the stored record cannot be removed the clear is tried once more.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let handle_logout = move |_| {
        if auth.write().logout().is_err() {
            if let Err(e) = auth.write().logout() {
                tracing::error!("Stored session could not be removed: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: handle_logout,
            "{label}"
        }
    }
}
