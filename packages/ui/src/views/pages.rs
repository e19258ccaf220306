//! Role-specific page variants picked by the route entries.

use dioxus::prelude::*;

use super::Placeholder;

#[component]
pub fn ManagerDashboard() -> Element {
    rsx! {
        Placeholder {
            title: "Manager Dashboard",
            description: "Enrollment, revenue and counselor performance across all programs.",
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Placeholder {
            title: "Dashboard",
            description: "Your inquiries, follow-ups and registrations.",
        }
    }
}

#[component]
pub fn StudentManagement() -> Element {
    rsx! {
        Placeholder {
            title: "Student Management",
            description: "All students across programs and batches.",
        }
    }
}

#[component]
pub fn MarketingStudentManagement() -> Element {
    rsx! {
        Placeholder {
            title: "My Students",
            description: "Students assigned to you.",
        }
    }
}

#[component]
pub fn BatchManagement() -> Element {
    rsx! {
        Placeholder {
            title: "Batch Management",
            description: "Create and manage batches.",
        }
    }
}

#[component]
pub fn BatchView() -> Element {
    rsx! {
        Placeholder {
            title: "Batches",
            description: "Upcoming and running batches.",
        }
    }
}
