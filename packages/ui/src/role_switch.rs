use dioxus::prelude::*;
use identity::{role_dispatch, Identity};

/// Picks `manager` or `other` for an identity already known to be logged in.
#[component]
pub fn RoleSwitch(identity: Identity, manager: Element, other: Element) -> Element {
    role_dispatch(&identity, manager, other)
}
