//! Form input validation.
//!
//! Pure and synchronous: each check either yields the request to send or the
//! message to show. Name and email are trimmed; passwords are taken verbatim.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::fmt;

use crate::error::ErrorCode;
use crate::net::types::AuthRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingSignupFields,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Both email and password are required.")]
    MissingLoginFields,
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSignupFields => "E_MISSING_SIGNUP_FIELDS",
            Self::PasswordTooShort => "E_PASSWORD_TOO_SHORT",
            Self::MissingLoginFields => "E_MISSING_LOGIN_FIELDS",
        }
    }
}

/// Raw form input at submit time. `name` is only collected on signup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Check signup input and build the `signup` action.
///
/// # Errors
///
/// [`ValidationError::MissingSignupFields`] if any field is empty,
/// [`ValidationError::PasswordTooShort`] if the password is under
/// [`MIN_PASSWORD_LEN`] UTF-16 code units.
pub fn validate_signup(input: &Credentials) -> Result<AuthRequest, ValidationError> {
    let name = input.name.as_deref().unwrap_or_default().trim();
    let email = input.email.trim();
    let password = input.password.as_str();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingSignupFields);
    }
    // Length in UTF-16 code units, as browser form fields report it.
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(AuthRequest::Signup { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Check login input and build the `login` action.
///
/// # Errors
///
/// [`ValidationError::MissingLoginFields`] if email or password is empty.
pub fn validate_login(input: &Credentials) -> Result<AuthRequest, ValidationError> {
    let email = input.email.trim();
    if email.is_empty() || input.password.is_empty() {
        return Err(ValidationError::MissingLoginFields);
    }
    Ok(AuthRequest::Login { email: email.to_owned(), password: input.password.clone() })
}
