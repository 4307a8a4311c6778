//! Client-side form validation for the auth pages
//!
//! Checks run before any request is sent. Messages are the ones shown under
//! the offending field.

/// Minimum length for a new password
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email")]
    EmailInvalid,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Please confirm your password")]
    ConfirmationRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Full name is required")]
    FullNameRequired,

    #[error("You must agree to the terms to continue")]
    TermsNotAccepted,
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::EmailInvalid);
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || value.chars().any(char::is_whitespace) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Login only requires a password to be present
pub fn check_password_present(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::PasswordRequired)
    } else {
        Ok(())
    }
}

pub fn check_new_password(value: &str) -> Result<(), FieldError> {
    check_password_present(value)?;
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn check_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if confirmation.is_empty() {
        Err(FieldError::ConfirmationRequired)
    } else if password != confirmation {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    }
}

pub fn check_full_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::FullNameRequired)
    } else {
        Ok(())
    }
}

/// Per-field errors of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
    pub terms: Option<FieldError>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_signup(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    agreed_to_terms: bool,
) -> SignupErrors {
    SignupErrors {
        full_name: check_full_name(full_name).err(),
        email: check_email(email).err(),
        password: check_new_password(password).err(),
        confirm_password: check_confirmation(password, confirm_password).err(),
        terms: (!agreed_to_terms).then_some(FieldError::TermsNotAccepted),
    }
}

/// Per-field errors of the reset-password form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetErrors {
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl ResetErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate_reset(password: &str, confirm_password: &str) -> ResetErrors {
    let password_error = match check_new_password(password) {
        Err(FieldError::PasswordRequired) => Some(FieldError::PasswordTooShort),
        other => other.err(),
    };
    ResetErrors {
        password: password_error,
        confirm_password: match check_confirmation(password, confirm_password) {
            Err(FieldError::ConfirmationRequired) if !password.is_empty() => {
                Some(FieldError::PasswordMismatch)
            }
            other => other.err(),
        },
    }
}
