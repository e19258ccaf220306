//! # Identity: the authenticated principal
//!
//! An [`Identity`] is the complete row returned by the credential store. Only
//! `email`, `password` and `role` are interpreted; every other column lands in
//! [`Identity::profile`] and is passed through untouched, so a record written to
//! session storage and read back is equal to the one the store returned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role value that selects the manager variant of a view.
pub const MANAGER_ROLE: &str = "manager";

/// A user record as held by the identity context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Remaining columns (`id`, `full_name`, ...).
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Identity {
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
            role: Some(role.into()),
            profile: Map::new(),
        }
    }

    /// Builder method to attach a plaintext password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Builder method to attach an extra profile field.
    pub fn with_profile(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Decode a row serialized as a JSON object.
    pub fn from_record(record: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record)
    }

    /// Exact, case-sensitive comparison against [`MANAGER_ROLE`].
    pub fn is_manager(&self) -> bool {
        self.role.as_deref() == Some(MANAGER_ROLE)
    }

    /// Get display name, falling back to email if `full_name` is not set.
    pub fn display_name(&self) -> &str {
        self.profile
            .get("full_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_keeps_extra_columns() {
        let record = json!({
            "id": "3f1c",
            "email": "a@x.com",
            "password": "pw1",
            "role": "manager",
            "full_name": "Ada",
        });
        let identity = Identity::from_record(record.clone()).unwrap();

        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.role.as_deref(), Some("manager"));
        assert_eq!(identity.profile.get("id"), Some(&json!("3f1c")));
        assert_eq!(serde_json::to_value(&identity).unwrap(), record);
    }

    #[test]
    fn test_null_role_is_not_manager() {
        let identity = Identity::from_record(json!({ "email": "a@x.com", "role": null })).unwrap();
        assert_eq!(identity.role, None);
        assert!(!identity.is_manager());
    }

    #[test]
    fn test_record_without_email_is_rejected() {
        assert!(Identity::from_record(json!({ "role": "manager" })).is_err());
    }

    #[test]
    fn test_display_name() {
        let plain = Identity::new("c@x.com", "counselor");
        assert_eq!(plain.display_name(), "c@x.com");

        let named = plain.with_profile("full_name", "Chandra");
        assert_eq!(named.display_name(), "Chandra");
    }
}
