//! Route guard decision.
//!
//! Pure function of the current identity: with no identity the protected
//! content is never produced and the caller is told to replace the current
//! history entry with the login path. With an identity the content is returned
//! as given, or built by the factory from that identity.

use crate::models::Identity;

/// Protected content: ready-made, or built from the logged-in identity.
pub enum Children<T> {
    Static(T),
    Factory(Box<dyn FnOnce(&Identity) -> T>),
}

impl<T> Children<T> {
    pub fn factory(f: impl FnOnce(&Identity) -> T + 'static) -> Self {
        Self::Factory(Box::new(f))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

#[derive(Debug, PartialEq)]
pub enum GuardDecision<T> {
    Allow(T),
    Redirect(Redirect),
}

pub fn evaluate<T>(
    identity: Option<&Identity>,
    login_path: &str,
    children: Children<T>,
) -> GuardDecision<T> {
    let Some(identity) = identity else {
        return GuardDecision::Redirect(Redirect {
            to: login_path.to_string(),
            replace: true,
        });
    };
    match children {
        Children::Static(content) => GuardDecision::Allow(content),
        Children::Factory(build) => GuardDecision::Allow(build(identity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_no_identity_never_builds_content() {
        let built = Rc::new(Cell::new(false));
        let flag = built.clone();
        let decision = evaluate(
            None,
            "/login",
            Children::factory(move |_| {
                flag.set(true);
                "secret"
            }),
        );

        assert_eq!(
            decision,
            GuardDecision::Redirect(Redirect {
                to: "/login".to_string(),
                replace: true,
            })
        );
        assert!(!built.get());
    }

    #[test]
    fn test_static_content_passes_through() {
        let user = Identity::new("a@x.com", "counselor");
        let decision = evaluate(Some(&user), "/login", Children::Static(vec![1, 2, 3]));
        assert_eq!(decision, GuardDecision::Allow(vec![1, 2, 3]));
    }

    #[test]
    fn test_factory_receives_identity() {
        let user = Identity::new("a@x.com", "manager");
        let decision = evaluate(
            Some(&user),
            "/login",
            Children::factory(|identity: &Identity| format!("hello {}", identity.email)),
        );
        assert_eq!(decision, GuardDecision::Allow("hello a@x.com".to_string()));
    }
}
