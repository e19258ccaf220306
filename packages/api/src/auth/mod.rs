//! Credential lookups against the `users` table.

mod credentials;

pub use credentials::ServerCredentials;
#[cfg(feature = "server")]
pub use credentials::{fetch_user_record, PgCredentials};
