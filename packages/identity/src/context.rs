//! # Identity context: single source of truth for "who is logged in"
//!
//! [`IdentityContext`] is constructed once at application start (the `ui`
//! crate's `AuthProvider` stores it in a signal) and owns both the current
//! identity and its [`SessionPersistence`].
//!
//! ## States
//!
//! | State | `current()` | Session record |
//! |-------|-------------|----------------|
//! | Unauthenticated | `None` | absent |
//! | Authenticated | `Some(identity)` | the same identity, as JSON |
//!
//! Every change writes storage first and then swaps the in-memory value, so by
//! the time anything reads the new state a reload would observe it too. A login
//! whose session write fails is reported as [`AuthError::UnexpectedFailure`] and
//! changes nothing. A logout always ends unauthenticated in memory and returns
//! the storage error, if any, so the caller can tell the user the record may
//! survive a restart. Login replaces the identity wholesale; logout is
//! idempotent. Concurrent attempts are not serialised: whichever runs last wins.
//!
//! ## Restoring
//!
//! [`IdentityContext::init`] reads the stored session immediately. Renderers
//! that must produce the same first frame on server and client start from
//! [`IdentityContext::pending`] instead and call [`IdentityContext::restore`]
//! once mounted; until then [`IdentityContext::is_restored`] is `false`.
//!
//! ## Errors
//!
//! A lookup that finds nothing and a lookup that cannot reach the store both
//! surface as [`AuthError::InvalidCredentials`]. A row that comes back but does
//! not decode is [`AuthError::UnexpectedFailure`]. On either error the current
//! identity is left as it was.

use thiserror::Error;

use crate::credentials::{CredentialLookup, LookupError};
use crate::models::Identity;
use crate::session::{SessionError, SessionPersistence};
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An error occurred during login. Please try again.")]
    UnexpectedFailure(String),
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub identity: Identity,
    /// Where the login view should navigate next.
    pub redirect_target: String,
}

/// Process-wide authentication state bound to its session storage.
#[derive(Debug)]
pub struct IdentityContext<S> {
    identity: Option<Identity>,
    persistence: SessionPersistence<S>,
    redirect_target: String,
    restored: bool,
}

impl<S: KeyValueStorage> IdentityContext<S> {
    /// Seed the context from the stored session. Call once per process.
    pub fn init(persistence: SessionPersistence<S>, redirect_target: impl Into<String>) -> Self {
        let mut ctx = Self::pending(persistence, redirect_target);
        ctx.restore();
        ctx
    }

    /// A context that has not looked at storage yet.
    pub fn pending(persistence: SessionPersistence<S>, redirect_target: impl Into<String>) -> Self {
        Self {
            identity: None,
            persistence,
            redirect_target: redirect_target.into(),
            restored: false,
        }
    }

    /// Read the stored session. Only the first call has any effect, and none
    /// once a login or logout has already decided the state.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.identity = self.persistence.read_session();
        self.restored = true;
        match &self.identity {
            Some(user) => tracing::info!(email = %user.email, "Restored session"),
            None => tracing::debug!("No stored session"),
        }
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn persistence(&self) -> &SessionPersistence<S> {
        &self.persistence
    }

    /// Look up the credentials and, on a match, become that user.
    pub async fn login<L: CredentialLookup>(
        &mut self,
        lookup: &L,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let found = lookup.find_user(email, password).await;
        self.complete_login(found)
    }

    /// Apply the result of a lookup performed elsewhere.
    ///
    /// UI code runs the lookup in a task and calls this afterwards, so no borrow
    /// of the context is held across the await.
    pub fn complete_login(
        &mut self,
        found: Result<Option<Identity>, LookupError>,
    ) -> Result<LoginOutcome, AuthError> {
        let identity = match found {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                tracing::info!("Login rejected: no matching user");
                return Err(AuthError::InvalidCredentials);
            }
            Err(LookupError::Backend(e)) => {
                tracing::warn!("Login lookup failed: {}", e);
                return Err(AuthError::InvalidCredentials);
            }
            Err(LookupError::Decode(e)) => {
                tracing::error!("Login returned a malformed user record: {}", e);
                return Err(AuthError::UnexpectedFailure(e));
            }
        };

        if let Err(e) = self.persistence.write_session(&identity) {
            tracing::error!(email = %identity.email, "Login not persisted: {}", e);
            return Err(AuthError::UnexpectedFailure(e.to_string()));
        }

        tracing::info!(email = %identity.email, role = ?identity.role, "Logged in");
        self.identity = Some(identity.clone());
        self.restored = true;
        Ok(LoginOutcome {
            identity,
            redirect_target: self.redirect_target.clone(),
        })
    }

    /// End the session. The context is unauthenticated afterwards even when the
    /// stored record could not be removed; that failure is returned.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(user) = &self.identity {
            tracing::info!(email = %user.email, "Logged out");
        }
        let cleared = self.persistence.clear_session();
        self.identity = None;
        self.restored = true;
        cleared
    }
}
