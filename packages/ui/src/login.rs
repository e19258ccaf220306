//! Email/password login form.

use dioxus::prelude::*;
use identity::{AuthError, CredentialLookup};

use crate::auth::use_auth;

/// Busy flag and error text of the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginFormState {
    /// Start a submission. Returns `false` when a lookup is already in flight
    /// or a field is empty, in which case no lookup may be started.
    pub fn begin(&mut self, email: &str, password: &str) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;

        if email.trim().is_empty() {
            self.error = Some("Please enter your email".to_string());
            return false;
        }
        if password.is_empty() {
            self.error = Some("Please enter your password".to_string());
            return false;
        }

        self.submitting = true;
        true
    }

    /// Re-enable the form with the outcome of the lookup.
    pub fn finish<T>(&mut self, result: Result<T, AuthError>) -> Option<T> {
        self.submitting = false;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Login form bound to the identity context.
///
/// Submits are ignored while a lookup is in flight. The lookup runs in a task
/// owned by this component, so if the form unmounts first the task is dropped
/// and never touches the context. Email and password are sent exactly as typed.
#[component]
pub fn LoginForm(on_success: EventHandler<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form = use_signal(LoginFormState::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let e = email();
        let p = password();
        if !form.write().begin(&e, &p) {
            return;
        }

        spawn(async move {
            let found = api::auth::ServerCredentials.find_user(&e, &p).await;
            let result = auth.write().complete_login(found);
            let outcome = form.write().finish(result);
            if let Some(outcome) = outcome {
                on_success.call(outcome.redirect_target);
            }
        });
    };

    let submitting = form().submitting;
    let error = form().error;

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_login,

            input {
                class: "login-input",
                r#type: "email",
                placeholder: "Enter your email",
                autocomplete: "email",
                required: true,
                disabled: submitting,
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "login-input",
                r#type: "password",
                placeholder: "Enter your password",
                autocomplete: "current-password",
                required: true,
                disabled: submitting,
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "login-submit",
                r#type: "submit",
                disabled: submitting,
                if submitting { "Signing in..." } else { "Sign in to your account" }
            }

            if let Some(err) = error {
                div { class: "login-error", "{err}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_ignored_while_in_flight() {
        let mut form = LoginFormState::default();
        let mut lookups = 0;

        for _ in 0..2 {
            if form.begin("a@x.com", "pw1") {
                lookups += 1;
            }
        }
        assert_eq!(lookups, 1);
        assert!(form.submitting);
    }

    #[test]
    fn test_failed_login_reenables_form() {
        let mut form = LoginFormState::default();
        assert!(form.begin("a@x.com", "wrong"));

        let outcome: Option<()> = form.finish(Err(AuthError::InvalidCredentials));
        assert!(outcome.is_none());
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Invalid email or password"));

        assert!(form.begin("a@x.com", "pw1"));
        assert!(form.error.is_none());
    }

    #[test]
    fn test_success_returns_outcome() {
        let mut form = LoginFormState::default();
        assert!(form.begin("a@x.com", "pw1"));
        assert_eq!(form.finish(Ok("/")), Some("/"));
        assert_eq!(form, LoginFormState::default());
    }

    #[test]
    fn test_padded_email_is_submitted() {
        let mut form = LoginFormState::default();
        assert!(form.begin(" a@x.com ", "pw1"));
        assert!(form.error.is_none());
    }

    #[test]
    fn test_empty_fields_start_no_lookup() {
        let mut form = LoginFormState::default();
        assert!(!form.begin("   ", "pw1"));
        assert_eq!(form.error.as_deref(), Some("Please enter your email"));
        assert!(!form.begin("a@x.com", ""));
        assert_eq!(form.error.as_deref(), Some("Please enter your password"));
        assert!(!form.submitting);
    }
}
