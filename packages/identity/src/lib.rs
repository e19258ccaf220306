//! # Identity crate: who is logged in, and what they may see
//!
//! Framework-free core shared by every SMIS front-end. Nothing in here depends on
//! Dioxus: the `ui` crate wraps these types in signals and components, the `api`
//! crate implements [`CredentialLookup`] against the hosted database.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | The [`Identity`] record and the manager role constant |
//! | [`storage`] | [`KeyValueStorage`] trait plus memory, file and browser backends |
//! | [`session`] | [`SessionPersistence`]: the durable copy of the identity |
//! | [`credentials`] | [`CredentialLookup`] contract and an in-memory table |
//! | [`context`] | [`IdentityContext`]: login/logout state transitions |
//! | [`guard`] | Route guard decision (`Allow` or redirect to login) |
//! | [`dispatch`] | [`role_dispatch`]: manager vs everyone else |
//! | [`config`] | [`SmisConfig`] read from `smis.toml` |

pub mod config;
pub mod context;
pub mod credentials;
pub mod dispatch;
pub mod guard;
pub mod models;
pub mod session;
pub mod storage;

mod file_store;
mod memory;
pub use file_store::FileStorage;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::SmisConfig;
pub use context::{AuthError, IdentityContext, LoginOutcome};
pub use credentials::{CredentialLookup, LookupError, MemoryCredentials};
pub use dispatch::role_dispatch;
pub use guard::{Children, GuardDecision, Redirect};
pub use models::{Identity, MANAGER_ROLE};
pub use session::{SessionError, SessionPersistence, DEFAULT_SESSION_KEY};
pub use storage::{KeyValueStorage, StorageError};
