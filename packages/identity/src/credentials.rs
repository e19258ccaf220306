//! Credential lookup contract.
//!
//! The credential store is a table of user rows queried by exact match on
//! `email` and `password`. Passwords are compared as stored (plaintext); the
//! `api` crate's `PgCredentials` and `ServerCredentials` implement the same
//! contract against the hosted database.

use std::future::Future;

use thiserror::Error;

use crate::models::Identity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The store could not be reached or rejected the query.
    #[error("credential store error: {0}")]
    Backend(String),
    /// A row came back but is not a valid identity.
    #[error("malformed user record: {0}")]
    Decode(String),
}

/// Async lookup of a user row by email and password.
pub trait CredentialLookup {
    /// `Ok(None)` when no row matches both fields.
    fn find_user(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<Identity>, LookupError>>;
}

/// In-process credential table.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    users: Vec<Identity>,
}

impl MemoryCredentials {
    pub fn new(users: Vec<Identity>) -> Self {
        Self { users }
    }

    pub fn insert(&mut self, user: Identity) {
        self.users.push(user);
    }
}

impl CredentialLookup for MemoryCredentials {
    async fn find_user(&self, email: &str, password: &str) -> Result<Option<Identity>, LookupError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email && u.password.as_deref() == Some(password))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MemoryCredentials {
        MemoryCredentials::new(vec![
            Identity::new("a@x.com", "manager").with_password("pw1"),
            Identity::new("b@x.com", "counselor").with_password("pw2"),
        ])
    }

    #[tokio::test]
    async fn test_exact_match() {
        let found = table().find_user("a@x.com", "pw1").await.unwrap();
        assert_eq!(found.map(|u| u.email), Some("a@x.com".to_string()));
    }

    #[tokio::test]
    async fn test_no_match() {
        let creds = table();
        assert!(creds.find_user("a@x.com", "wrong").await.unwrap().is_none());
        assert!(creds.find_user("A@x.com", "pw1").await.unwrap().is_none());
        // Password of another account
        assert!(creds.find_user("a@x.com", "pw2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_part_of_the_value() {
        let creds = table();
        assert!(creds.find_user(" a@x.com", "pw1").await.unwrap().is_none());
        assert!(creds.find_user("a@x.com", "pw1 ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_row_without_password_never_matches() {
        let mut creds = MemoryCredentials::default();
        creds.insert(Identity::new("c@x.com", "counselor"));
        assert!(creds.find_user("c@x.com", "").await.unwrap().is_none());
    }
}
