//! Unit tests for error types

use bazaar_domain::{AuthError, Error};

#[test]
fn test_auth_messages() {
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "Invalid email or password"
    );
    assert_eq!(
        AuthError::AccountDeactivated.to_string(),
        "Account is deactivated. Please contact support."
    );
    assert_eq!(
        AuthError::Failed("Login").to_string(),
        "Login failed. Please try again."
    );
}

#[test]
fn test_auth_error_is_transparent() {
    let err: Error = AuthError::EmailTaken.into();
    assert_eq!(err.to_string(), "User with this email already exists");
    assert_eq!(err.as_auth(), Some(&AuthError::EmailTaken));
}

#[test]
fn test_constructor_helpers() {
    let err = Error::configuration("secret too short");
    assert!(err.to_string().contains("secret too short"));
    assert!(err.as_auth().is_none());

    let err = Error::database("store offline");
    assert!(matches!(err, Error::Database { .. }));
}
