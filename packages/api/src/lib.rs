//! # API crate: shared fullstack server functions for SMIS
//!
//! Defines the Dioxus server functions the web and desktop front-ends call, and the
//! server-side access to the hosted PostgreSQL database behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Credential lookups: [`auth::ServerCredentials`] (client) and `PgCredentials` (server) |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | none | Accounts created by [`setup_users`] |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled twice:
//! once with full server logic (behind `#[cfg(feature = "server")]`) and once as a
//! thin client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `login_password`
//! - **Setup**: `setup_users`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
pub mod models;

pub use identity::{Identity, MANAGER_ROLE};

/// Result of seeding the default accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SetupReport {
    /// Emails inserted by this run.
    pub created: Vec<String>,
    /// Emails that were already present.
    pub existing: Vec<String>,
}

/// Look up the `users` row matching both email and password.
///
/// Returns the whole row as a JSON object; the caller decodes it into an
/// [`Identity`] so a malformed row is told apart from a failed request.
#[cfg(feature = "server")]
#[post("/api/auth/login-password")]
pub async fn login_password(
    email: String,
    password: String,
) -> Result<Option<serde_json::Value>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    auth::fetch_user_record(pool, &email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(
    email: String,
    password: String,
) -> Result<Option<serde_json::Value>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Insert the default accounts that are not there yet.
#[cfg(feature = "server")]
#[post("/api/setup/users")]
pub async fn setup_users() -> Result<SetupReport, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut report = SetupReport::default();
    for user in models::default_users() {
        let inserted: Option<(String,)> = sqlx::query_as(
            "INSERT INTO users (email, password, role, full_name) VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO NOTHING
             RETURNING email",
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.role)
        .bind(&user.full_name)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

        match inserted {
            Some((email,)) => {
                tracing::info!(%email, role = %user.role, "Created user");
                report.created.push(email);
            }
            None => report.existing.push(user.email),
        }
    }

    Ok(report)
}

#[cfg(not(feature = "server"))]
#[post("/api/setup/users")]
pub async fn setup_users() -> Result<SetupReport, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
