//! Login page view.

use dioxus::prelude::*;
use identity::{IdentityContext, KeyValueStorage};

use crate::auth::{use_auth, use_config};
use crate::login::LoginForm;

/// Where to send someone who opens the login page already logged in.
fn already_logged_in<S: KeyValueStorage>(ctx: &IdentityContext<S>, home: &str) -> Option<String> {
    ctx.is_authenticated().then(|| home.to_string())
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let config = use_config();
    let nav = use_navigator();

    if !auth.read().is_restored() {
        return rsx! {};
    }

    let home = already_logged_in(&*auth.read(), &config.auth.home_path);
    if let Some(home) = home {
        nav.replace(home);
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: crate::SMIS_CSS }
        div {
            class: "login-container",
            div {
                class: "login-card",
                div { class: "login-logo", "SMIS" }
                h1 { class: "login-title", "Welcome back" }
                p { class: "login-subtitle", "Enter your credentials to access your account" }
                LoginForm {
                    on_success: move |target: String| {
                        nav.push(target);
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity::{Identity, MemoryStorage, SessionPersistence};

    #[test]
    fn test_logged_in_user_goes_home() {
        let storage = MemoryStorage::new();
        let persistence = SessionPersistence::with_default_key(storage);
        persistence
            .write_session(&Identity::new("a@x.com", "counselor"))
            .unwrap();
        let ctx = IdentityContext::init(persistence, "/");

        assert_eq!(already_logged_in(&ctx, "/"), Some("/".to_string()));
    }

    #[test]
    fn test_anonymous_user_stays() {
        let ctx = IdentityContext::init(
            SessionPersistence::with_default_key(MemoryStorage::new()),
            "/",
        );
        assert_eq!(already_logged_in(&ctx, "/"), None);
    }
}
