//! Role dispatch between a manager view and everyone else's.
//!
//! Every call site names its own pair; there is no shared registry.

use crate::models::Identity;

/// `if_manager` when `identity.role` is exactly `"manager"`, otherwise `otherwise`.
pub fn role_dispatch<T>(identity: &Identity, if_manager: T, otherwise: T) -> T {
    if identity.is_manager() {
        if_manager
    } else {
        otherwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_role(role: Option<&str>) -> Identity {
        let mut identity = Identity::new("a@x.com", "");
        identity.role = role.map(str::to_string);
        identity
    }

    #[test]
    fn test_manager_gets_first_view() {
        assert_eq!(role_dispatch(&with_role(Some("manager")), 'A', 'B'), 'A');
    }

    #[test]
    fn test_everyone_else_gets_second_view() {
        for role in [
            None,
            Some(""),
            Some("counselor"),
            Some("marketing"),
            Some("MANAGER"),
            Some("Manager"),
            Some(" manager"),
            Some("manager "),
        ] {
            assert_eq!(role_dispatch(&with_role(role), 'A', 'B'), 'B', "role {role:?}");
        }
    }
}
