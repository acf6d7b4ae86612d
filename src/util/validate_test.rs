use super::*;

fn signup(name: &str, email: &str, password: &str) -> Credentials {
    Credentials { name: Some(name.to_owned()), email: email.to_owned(), password: password.to_owned() }
}

fn login(email: &str, password: &str) -> Credentials {
    Credentials { name: None, email: email.to_owned(), password: password.to_owned() }
}

// =============================================================================
// validate_signup
// =============================================================================

#[test]
fn signup_trims_name_and_email_but_not_password() {
    let req = validate_signup(&signup("  Ann ", " a@x.com ", " pass1 ")).unwrap();
    assert_eq!(
        req,
        AuthRequest::Signup { name: "Ann".into(), email: "a@x.com".into(), password: " pass1 ".into() }
    );
}

#[test]
fn signup_requires_every_field() {
    for input in [
        signup("", "a@x.com", "secret1"),
        signup("   ", "a@x.com", "secret1"),
        signup("Ann", " ", "secret1"),
        signup("Ann", "a@x.com", ""),
        Credentials { name: None, email: "a@x.com".into(), password: "secret1".into() },
    ] {
        assert_eq!(validate_signup(&input), Err(ValidationError::MissingSignupFields), "{input:?}");
    }
}

#[test]
fn signup_rejects_short_password_with_message() {
    let err = validate_signup(&signup("Ann", "a@x.com", "12345")).unwrap_err();
    assert_eq!(err, ValidationError::PasswordTooShort);
    assert_eq!(err.to_string(), "Password must be at least 6 characters.");
}

#[test]
fn signup_accepts_exactly_minimum_length() {
    assert!(validate_signup(&signup("Ann", "a@x.com", "123456")).is_ok());
}

#[test]
fn password_length_counts_utf16_units() {
    assert!(validate_signup(&signup("Ann", "a@x.com", "\u{1F600}\u{1F600}\u{1F600}")).is_ok());
    assert_eq!(validate_signup(&signup("Ann", "a@x.com", "\u{1F600}\u{1F600}x")), Err(ValidationError::PasswordTooShort));
}

#[test]
fn signup_missing_fields_wins_over_short_password() {
    assert_eq!(validate_signup(&signup("", "a@x.com", "1")), Err(ValidationError::MissingSignupFields));
}

// =============================================================================
// validate_login
// =============================================================================

#[test]
fn login_requires_email_and_password() {
    assert_eq!(validate_login(&login("  ", "pw")), Err(ValidationError::MissingLoginFields));
    assert_eq!(validate_login(&login("a@x.com", "")), Err(ValidationError::MissingLoginFields));
    assert_eq!(
        ValidationError::MissingLoginFields.to_string(),
        "Both email and password are required."
    );
}

#[test]
fn login_has_no_length_rule() {
    let req = validate_login(&login(" a@x.com ", "pw")).unwrap();
    assert_eq!(req, AuthRequest::Login { email: "a@x.com".into(), password: "pw".into() });
}

#[test]
fn credentials_debug_hides_password() {
    let dbg = format!("{:?}", login("a@x.com", "hunter22"));
    assert!(!dbg.contains("hunter22"));
}

#[test]
fn validation_errors_are_not_retryable() {
    assert!(!ValidationError::PasswordTooShort.retryable());
    assert_eq!(ValidationError::MissingSignupFields.error_code(), "E_MISSING_SIGNUP_FIELDS");
}
