use api::{AccountUpdate, AdminUserUpdate, User};

use super::validate::{self, ValidationError};
use super::Submit;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsernameForm {
    pub username: String,
}

impl UsernameForm {
    pub fn submission(&self, current: &str) -> Result<Submit<AccountUpdate>, ValidationError> {
        validate::username(&self.username)?;
        if self.username == current {
            return Ok(Submit::Unchanged);
        }
        Ok(Submit::Send(AccountUpdate::name(self.username.clone())))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailForm {
    pub email: String,
    pub confirm_email: String,
}

impl EmailForm {
    pub fn submission(&self, current: &str) -> Result<Submit<AccountUpdate>, ValidationError> {
        validate::email(&self.email)?;
        if self.email == current {
            return Ok(Submit::Unchanged);
        }
        if self.email != self.confirm_email {
            return Err(ValidationError::EmailMismatch);
        }
        Ok(Submit::Send(AccountUpdate::email(self.email.clone())))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn submission(&self) -> Result<AccountUpdate, ValidationError> {
        validate::password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(AccountUpdate::password(self.password.clone()))
    }
}

/// Administrator's inline edit of another account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUserForm {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl AdminUserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }

    pub fn submission(&self, current: &User) -> Result<Submit<AdminUserUpdate>, ValidationError> {
        validate::email(&self.email)?;
        validate::username(&self.username)?;
        if *self == Self::from_user(current) {
            return Ok(Submit::Unchanged);
        }
        Ok(Submit::Send(AdminUserUpdate {
            name: self.username.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Id;

    fn user() -> User {
        User {
            id: Id::new("2"),
            name: "bob".into(),
            email: "bob@example.com".into(),
            is_admin: false,
        }
    }

    #[test]
    fn test_same_username_is_unchanged() {
        let form = UsernameForm {
            username: "bo_".into(),
        };
        assert_eq!(form.submission("bo_"), Ok(Submit::Unchanged));
        assert_eq!(
            form.submission("bob"),
            Ok(Submit::Send(AccountUpdate::name("bo_")))
        );
    }

    #[test]
    fn test_username_validated_before_comparison() {
        let form = UsernameForm {
            username: "bo".into(),
        };
        assert_eq!(form.submission("bo"), Err(ValidationError::Username));
    }

    #[test]
    fn test_email_change_needs_confirmation() {
        let mut form = EmailForm {
            email: "new@example.com".into(),
            confirm_email: "typo@example.com".into(),
        };
        assert_eq!(
            form.submission("bo@example.com"),
            Err(ValidationError::EmailMismatch)
        );
        form.confirm_email = form.email.clone();
        assert_eq!(
            form.submission("bo@example.com"),
            Ok(Submit::Send(AccountUpdate::email("new@example.com")))
        );
    }

    #[test]
    fn test_same_email_skips_confirmation() {
        let form = EmailForm {
            email: "bo@example.com".into(),
            confirm_email: String::new(),
        };
        assert_eq!(form.submission("bo@example.com"), Ok(Submit::Unchanged));
    }

    #[test]
    fn test_password_change() {
        let form = PasswordForm {
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        assert_eq!(form.submission(), Err(ValidationError::PasswordMismatch));

        let form = PasswordForm {
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        assert_eq!(form.submission(), Ok(AccountUpdate::password("secret1")));
    }

    #[test]
    fn test_admin_edit() {
        let current = user();
        let mut form = AdminUserForm::from_user(&current);
        assert_eq!(form.submission(&current), Ok(Submit::Unchanged));

        form.is_admin = true;
        match form.submission(&current) {
            Ok(Submit::Send(update)) => {
                assert!(update.is_admin);
                assert_eq!(update.name, "bob");
            }
            other => panic!("unexpected {:?}", other),
        }

        form.email = "broken".into();
        assert_eq!(form.submission(&current), Err(ValidationError::Email));
    }
}
