//! Navigation shell: header, role-dependent sidebar menu, content area.

use dioxus::prelude::*;
use identity::{role_dispatch, Identity};

use crate::auth::use_auth;
use crate::navbar::Navbar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub title: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSection {
    pub label: &'static str,
    pub items: &'static [MenuItem],
}

const MANAGER_MENU: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[
            MenuItem { title: "Dashboard", path: "/" },
            MenuItem { title: "Analytics", path: "/analytics" },
        ],
    },
    MenuSection {
        label: "Management",
        items: &[
            MenuItem { title: "Student Management", path: "/student-management" },
            MenuItem { title: "Batches", path: "/batches" },
        ],
    },
];

const STAFF_MENU: &[MenuSection] = &[
    MenuSection {
        label: "Overview",
        items: &[MenuItem { title: "Dashboard", path: "/" }],
    },
    MenuSection {
        label: "Students",
        items: &[
            MenuItem { title: "My Students", path: "/student-management" },
            MenuItem { title: "Batches", path: "/batches" },
        ],
    },
];

/// Menu sections for an identity: managers get their own set, everyone else shares one.
pub fn menu_for(identity: &Identity) -> &'static [MenuSection] {
    role_dispatch(identity, MANAGER_MENU, STAFF_MENU)
}

#[component]
pub fn AppSidebar(identity: Identity) -> Element {
    rsx! {
        nav {
            class: "sidebar",
            for section in menu_for(&identity) {
                div {
                    key: "{section.label}",
                    class: "sidebar-section",
                    span { class: "sidebar-section-label", "{section.label}" }
                    for item in section.items {
                        Link {
                            key: "{item.path}",
                            class: "sidebar-link",
                            active_class: "active",
                            to: item.path,
                            "{item.title}"
                        }
                    }
                }
            }
        }
    }
}

/// Layout for every logged-in page. Render inside a [`RouteGuard`](crate::RouteGuard).
#[component]
pub fn AppShell(children: Element) -> Element {
    let auth = use_auth();
    let identity = auth.read().current().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: crate::SMIS_CSS }
        div {
            class: "app-shell",
            Navbar {}
            div {
                class: "app-body",
                if let Some(identity) = identity {
                    AppSidebar { identity }
                }
                main { class: "app-content", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(sections: &[MenuSection]) -> Vec<&'static str> {
        sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.path))
            .collect()
    }

    #[test]
    fn test_manager_menu() {
        let manager = Identity::new("a@x.com", "manager");
        assert_eq!(menu_for(&manager), MANAGER_MENU);
        assert!(paths(menu_for(&manager)).contains(&"/analytics"));
    }

    #[test]
    fn test_other_roles_share_staff_menu() {
        for role in ["counselor", "marketing", "Manager"] {
            let user = Identity::new("b@x.com", role);
            assert_eq!(menu_for(&user), STAFF_MENU);
        }
        assert!(!paths(STAFF_MENU).contains(&"/analytics"));
    }
}
