//! Route guard components.

use dioxus::prelude::*;
use identity::guard::{evaluate, Children, GuardDecision};
use identity::{Identity, IdentityContext, KeyValueStorage};

use crate::auth::{use_auth, use_config};
use crate::role_switch::RoleSwitch;

/// What a [`RouteGuard`] renders once access is allowed.
#[derive(Clone)]
pub enum GuardContent {
    Static(Element),
    /// Called with the logged-in identity on every render.
    Factory(Callback<Identity, Element>),
}

impl PartialEq for GuardContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Factory(a), Self::Factory(b)) => a == b,
            // Elements always re-render.
            _ => false,
        }
    }
}

/// Guard decision for the context, or `None` while the stored session has not
/// been read yet.
pub(crate) fn decide<S: KeyValueStorage, T>(
    ctx: &IdentityContext<S>,
    login_path: &str,
    children: Children<T>,
) -> Option<GuardDecision<T>> {
    ctx.is_restored().then(|| evaluate(ctx.current(), login_path, children))
}

/// Renders `content` for a logged-in user, otherwise replaces the current
/// history entry with the configured login path. Renders nothing until the
/// session has been restored.
#[component]
pub fn RouteGuard(content: GuardContent) -> Element {
    let auth = use_auth();
    let config = use_config();
    let nav = use_navigator();

    let children = match content {
        GuardContent::Static(element) => Children::Static(element),
        GuardContent::Factory(render) => {
            Children::factory(move |identity: &Identity| render.call(identity.clone()))
        }
    };

    let decision = decide(&*auth.read(), &config.auth.login_path, children);
    match decision {
        None => rsx! {},
        Some(GuardDecision::Allow(element)) => element,
        Some(GuardDecision::Redirect(redirect)) => {
            tracing::debug!(to = %redirect.to, "Route guard redirect");
            if redirect.replace {
                nav.replace(redirect.to);
            } else {
                nav.push(redirect.to);
            }
            rsx! {}
        }
    }
}

/// Guarded route entry that shows `manager` to managers and `other` to everyone else.
#[component]
pub fn RoleRoute(manager: Element, other: Element) -> Element {
    let render = Callback::new(move |identity: Identity| {
        rsx! {
            RoleSwitch { identity, manager: manager.clone(), other: other.clone() }
        }
    });

    rsx! {
        RouteGuard { content: GuardContent::Factory(render) }
    }
}
