//! Sign-in flow state
//!
//! `AuthFlow` holds everything the sign-in screen mutates: the selected role,
//! the credentials draft and the sign-in / sign-up mode. Transitions:
//!
//! - no role -> select -> role chosen (credentials view)
//! - role chosen -> toggle mode -> role chosen (labels only)
//! - role chosen -> change role -> no role (credentials are kept)
//! - role chosen -> submit / provider -> `AuthSuccess` for the caller

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::role::Role;

/// Whether the form reads as "sign in" or "sign up"
#[derive(Clone, Copy, Debug, Display, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    #[display("sign-in")]
    SignIn,
    #[display("sign-up")]
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Join Us",
        }
    }

    /// Verb used in the "Sign in as a ..." subtitle
    pub fn verb(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::SignUp => "Sign up",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    /// Text of the link that switches to the other mode
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? Sign up",
            AuthMode::SignUp => "Already have an account? Sign in",
        }
    }
}

/// External identity providers offered next to the email form
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
pub enum Provider {
    #[display("google")]
    Google,
}

/// Email and password as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity handed to the caller once sign-in completes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub role: Role,
    pub display_name: String,
}

impl AuthSuccess {
    /// Canned identity for `role`
    pub fn mock(role: Role) -> Self {
        Self {
            role,
            display_name: role.mock_display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFlowError {
    #[error("no role selected")]
    NoRoleSelected,
    #[error("email is required")]
    MissingEmail,
    #[error("password is required")]
    MissingPassword,
}

/// Which half of the screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    RolePicker,
    Credentials(Role),
}

/// Structured log record of a sign-in attempt. The password never leaves
/// the draft; only whether one was typed.
#[derive(Debug, Serialize)]
pub struct LoginAttempt<'a> {
    pub role: Option<Role>,
    pub mode: AuthMode,
    pub email: &'a str,
    pub has_password: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFlow {
    role: Option<Role>,
    credentials: Credentials,
    mode: AuthMode,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn view(&self) -> AuthView {
        match self.role {
            Some(role) => AuthView::Credentials(role),
            None => AuthView::RolePicker,
        }
    }

    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Back to the picker. The credentials draft and mode survive.
    pub fn change_role(&mut self) {
        self.role = None;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn login_attempt(&self) -> LoginAttempt<'_> {
        LoginAttempt {
            role: self.role,
            mode: self.mode,
            email: &self.credentials.email,
            has_password: !self.credentials.password.is_empty(),
        }
    }

    /// Email form submission. Only emptiness is checked, matching the
    /// form's `required` inputs; contents are never inspected.
    pub fn submit(&self) -> Result<AuthSuccess, AuthFlowError> {
        let role = self.role.ok_or(AuthFlowError::NoRoleSelected)?;
        if self.credentials.email.is_empty() {
            return Err(AuthFlowError::MissingEmail);
        }
        if self.credentials.password.is_empty() {
            return Err(AuthFlowError::MissingPassword);
        }
        Ok(AuthSuccess::mock(role))
    }

    /// Provider sign-in ignores the credentials draft entirely.
    pub fn continue_with(&self, _provider: Provider) -> Result<AuthSuccess, AuthFlowError> {
        let role = self.role.ok_or(AuthFlowError::NoRoleSelected)?;
        Ok(AuthSuccess::mock(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flow_starts_on_picker_in_sign_in_mode() {
        let flow = AuthFlow::new();
        assert_eq!(flow.view(), AuthView::RolePicker);
        assert_eq!(flow.mode(), AuthMode::SignIn);
        assert_eq!(flow.credentials(), &Credentials::default());
    }

    #[test]
    fn test_select_role_shows_credentials() {
        let mut flow = AuthFlow::new();
        flow.select_role(Role::Teacher);
        assert_eq!(flow.view(), AuthView::Credentials(Role::Teacher));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::SignIn.heading(), "Welcome Back");
        assert_eq!(AuthMode::SignUp.heading(), "Join Us");
        assert_eq!(AuthMode::SignIn.submit_label(), "Sign In");
        assert_eq!(AuthMode::SignUp.submit_label(), "Sign Up");
        assert_eq!(AuthMode::SignIn.switch_prompt(), "Don't have an account? Sign up");
        assert_eq!(AuthMode::SignUp.switch_prompt(), "Already have an account? Sign in");
    }

    #[test]
    fn test_toggle_twice_restores_mode() {
        let mut flow = AuthFlow::new();
        flow.toggle_mode();
        assert_eq!(flow.mode(), AuthMode::SignUp);
        flow.toggle_mode();
        assert_eq!(flow.mode(), AuthMode::SignIn);
    }

    #[test]
    fn test_submit_without_role_fails() {
        let mut flow = AuthFlow::new();
        flow.set_email("a@b.c");
        flow.set_password("pw");
        assert_eq!(flow.submit(), Err(AuthFlowError::NoRoleSelected));
        assert_eq!(
            flow.continue_with(Provider::Google),
            Err(AuthFlowError::NoRoleSelected)
        );
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut flow = AuthFlow::new();
        flow.select_role(Role::Student);
        assert_eq!(flow.submit(), Err(AuthFlowError::MissingEmail));

        flow.set_email("learner@example.org");
        assert_eq!(flow.submit(), Err(AuthFlowError::MissingPassword));

        flow.set_password("x");
        assert!(flow.submit().is_ok());
    }

    #[test]
    fn test_provider_ignores_empty_fields() {
        let mut flow = AuthFlow::new();
        flow.select_role(Role::Ngo);
        assert_eq!(
            flow.continue_with(Provider::Google),
            Ok(AuthSuccess::mock(Role::Ngo))
        );
    }

    #[test]
    fn test_login_attempt_redacts_password() {
        let mut flow = AuthFlow::new();
        flow.select_role(Role::Teacher);
        flow.set_email("green@school.edu");
        flow.set_password("hunter2");

        let json = serde_json::to_string(&flow.login_attempt()).unwrap();
        assert!(json.contains("green@school.edu"));
        assert!(json.contains("\"teacher\""));
        assert!(json.contains("\"has_password\":true"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_mode_serializes_like_display() {
        for mode in [AuthMode::SignIn, AuthMode::SignUp] {
            assert_eq!(
                serde_json::to_string(&mode).unwrap(),
                format!("\"{}\"", mode)
            );
        }

        let mut flow = AuthFlow::new();
        flow.select_role(Role::Ngo);
        let json = serde_json::to_string(&flow.login_attempt()).unwrap();
        assert!(json.contains("\"mode\":\"sign-in\""), "{json}");
    }
}
