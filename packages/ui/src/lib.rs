//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod views;

pub const SMIS_CSS: Asset = asset!("/assets/smis.css");

mod storage;
pub use storage::{load_config, make_storage, PlatformStorage};

mod auth;
pub use auth::{use_auth, use_config, AuthProvider, LogoutButton, SessionContext};

mod guard;
pub use guard::{GuardContent, RoleRoute, RouteGuard};

mod role_switch;
pub use role_switch::RoleSwitch;

mod login;
pub use login::{LoginForm, LoginFormState};

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{menu_for, AppShell, AppSidebar, MenuItem, MenuSection};

mod setup;
pub use setup::SetupPanel;
