//! # Accounts seeded by `setup_users`
//!
//! A fresh database has an empty `users` table. [`default_users`] lists the
//! accounts the setup page inserts: one manager and the counselor team. Each
//! row is stored with the plaintext password the login form compares against;
//! change them after first login.

use identity::MANAGER_ROLE;
use serde::{Deserialize, Serialize};

/// Role given to every non-manager account created here.
pub const COUNSELOR_ROLE: &str = "counselor";

/// A row to insert into `users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: String,
    pub full_name: String,
}

impl NewUser {
    fn new(email: &str, password: &str, role: &str, full_name: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
            full_name: full_name.to_string(),
        }
    }
}

pub fn default_users() -> Vec<NewUser> {
    vec![
        NewUser::new("manager@smis.edu.lk", "manager123", MANAGER_ROLE, "Manager"),
        NewUser::new("counselor1@smis.edu.lk", "counselor123", COUNSELOR_ROLE, "Counselor One"),
        NewUser::new("counselor2@smis.edu.lk", "counselor123", COUNSELOR_ROLE, "Counselor Two"),
        NewUser::new("counselor3@smis.edu.lk", "counselor123", COUNSELOR_ROLE, "Counselor Three"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_one_manager() {
        let managers = default_users()
            .into_iter()
            .filter(|u| u.role == MANAGER_ROLE)
            .count();
        assert_eq!(managers, 1);
    }

    #[test]
    fn test_emails_are_unique() {
        let users = default_users();
        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), users.len());
    }
}
