//! [`CredentialLookup`] implementations for the hosted database.
//!
//! - [`ServerCredentials`] runs on the client and calls the `login_password`
//!   server function. A failed request is a [`LookupError::Backend`]; a row that
//!   does not decode is a [`LookupError::Decode`].
//! - `PgCredentials` (server only) queries the pool directly.

use identity::{CredentialLookup, Identity, LookupError};

/// Lookup through the `login_password` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerCredentials;

impl CredentialLookup for ServerCredentials {
    async fn find_user(&self, email: &str, password: &str) -> Result<Option<Identity>, LookupError> {
        let record = crate::login_password(email.to_string(), password.to_string())
            .await
            .map_err(|e| {
                tracing::warn!("login_password request failed: {}", e);
                LookupError::Backend(e.to_string())
            })?;
        decode_record(record)
    }
}

fn decode_record(record: Option<serde_json::Value>) -> Result<Option<Identity>, LookupError> {
    record
        .map(|row| Identity::from_record(row).map_err(|e| LookupError::Decode(e.to_string())))
        .transpose()
}

/// Fetch the row matching email and password, as a JSON object.
#[cfg(feature = "server")]
pub async fn fetch_user_record(
    pool: &sqlx::PgPool,
    email: &str,
    password: &str,
) -> Result<Option<serde_json::Value>, sqlx::Error> {
    let row: Option<(serde_json::Value,)> = sqlx::query_as(
        "SELECT row_to_json(u) FROM users u WHERE u.email = $1 AND u.password = $2 LIMIT 1",
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(record,)| record))
}

/// Lookup straight against the pool, for server-side callers.
#[cfg(feature = "server")]
#[derive(Clone, Copy, Debug)]
pub struct PgCredentials<'a> {
    pool: &'a sqlx::PgPool,
}

#[cfg(feature = "server")]
impl<'a> PgCredentials<'a> {
    pub fn new(pool: &'a sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[cfg(feature = "server")]
impl CredentialLookup for PgCredentials<'_> {
    async fn find_user(&self, email: &str, password: &str) -> Result<Option<Identity>, LookupError> {
        let record = fetch_user_record(self.pool, email, password)
            .await
            .map_err(|e| LookupError::Backend(e.to_string()))?;
        decode_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_row() {
        let row = json!({
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "email": "manager@smis.edu.lk",
            "password": "manager123",
            "role": "manager",
            "full_name": "Site Manager",
            "created_at": "2025-06-01T00:00:00+00:00",
        });
        let identity = decode_record(Some(row)).unwrap().unwrap();
        assert!(identity.is_manager());
        assert_eq!(identity.display_name(), "Site Manager");
        assert!(identity.profile.contains_key("created_at"));
    }

    #[test]
    fn test_no_row() {
        assert_eq!(decode_record(None), Ok(None));
    }

    #[test]
    fn test_malformed_row_is_decode_error() {
        let result = decode_record(Some(json!({ "email": 42 })));
        assert!(matches!(result, Err(LookupError::Decode(_))));
    }
}
