use std::fmt;

use api::{LoginRequest, SignupRequest};

use super::validate::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Label of the control that switches to the other mode.
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Sign up",
            AuthMode::Signup => "Already have an account? Log in",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The combined login / signup draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthForm {
    /// Check fields in display order: email, password, then for signup the
    /// username and the password confirmation.
    pub fn submission(&self) -> Result<AuthSubmission, ValidationError> {
        validate::email(&self.email)?;
        validate::password(&self.password)?;
        match self.mode {
            AuthMode::Login => Ok(AuthSubmission::Login(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            })),
            AuthMode::Signup => {
                validate::username(&self.username)?;
                if self.password != self.confirm_password {
                    return Err(ValidationError::PasswordMismatch);
                }
                Ok(AuthSubmission::Signup(SignupRequest {
                    name: self.username.clone(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, confirm: &str) -> AuthForm {
        AuthForm {
            mode: AuthMode::Signup,
            email: "ana@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            username: "ana".into(),
        }
    }

    #[test]
    fn test_login_submission() {
        let form = AuthForm {
            email: "ana@example.com".into(),
            password: "secret1".into(),
            ..AuthForm::default()
        };
        assert_eq!(
            form.submission(),
            Ok(AuthSubmission::Login(LoginRequest {
                email: "ana@example.com".into(),
                password: "secret1".into(),
            }))
        );
    }

    #[test]
    fn test_signup_password_mismatch() {
        let err = signup("secret1", "secret2").submission().unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords don't match.");
    }

    #[test]
    fn test_signup_submission() {
        match signup("secret1", "secret1").submission() {
            Ok(AuthSubmission::Signup(req)) => {
                assert_eq!(req.name, "ana");
                assert_eq!(req.password, "secret1");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_validation_order() {
        let mut form = signup("bad", "other");
        form.email = "nope".into();
        assert_eq!(form.submission(), Err(ValidationError::Email));

        form.email = "ana@example.com".into();
        assert_eq!(form.submission(), Err(ValidationError::Password));

        form.password = "secret1".into();
        form.username = "x".into();
        assert_eq!(form.submission(), Err(ValidationError::Username));
    }

    #[test]
    fn test_login_ignores_signup_fields() {
        let mut form = signup("secret1", "mismatch");
        form.mode = AuthMode::Login;
        form.username.clear();
        assert!(matches!(form.submission(), Ok(AuthSubmission::Login(_))));
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.to_string(), "Sign Up");
    }
}
