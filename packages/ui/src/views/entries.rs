//! Route entries shared by the web and desktop routers.
//!
//! `Home`, `Students` and `Batches` each choose between a manager view and the
//! view for everyone else; the pair is stated at each entry.

use dioxus::prelude::*;

use super::pages::*;
use super::Placeholder;
use crate::guard::RoleRoute;

#[component]
pub fn Home() -> Element {
    rsx! {
        RoleRoute {
            manager: rsx! { ManagerDashboard {} },
            other: rsx! { Dashboard {} },
        }
    }
}

#[component]
pub fn Students() -> Element {
    rsx! {
        RoleRoute {
            manager: rsx! { StudentManagement {} },
            other: rsx! { MarketingStudentManagement {} },
        }
    }
}

#[component]
pub fn Batches() -> Element {
    rsx! {
        RoleRoute {
            manager: rsx! { BatchManagement {} },
            other: rsx! { BatchView {} },
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        Placeholder {
            title: "Analytics",
            description: "Trends by program, batch and region.",
        }
    }
}
