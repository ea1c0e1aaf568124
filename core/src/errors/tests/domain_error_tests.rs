//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_auth_error_messages() {
    let message = AuthError::AuthenticationFailed.to_string();
    assert_eq!(message, "Invalid username or password");
}

#[test]
fn test_validation_error_field() {
    let error = ValidationError::InvalidLength {
        field: "card_number".to_string(),
        min: 13,
        max: 19,
        actual: 3,
    };
    assert_eq!(error.field(), "card_number");
    let message = error.to_string();
    assert!(message.contains("card_number"));
    assert!(message.contains("actual: 3"));
}

#[test]
fn test_bridged_errors_are_transparent() {
    let error: DomainError = TokenError::TokenExpired.into();
    assert_eq!(error.to_string(), "Token expired");

    let error: DomainError = AuthError::UserAlreadyExists.into();
    assert!(matches!(error, DomainError::Auth(AuthError::UserAlreadyExists)));
}

#[test]
fn test_error_codes() {
    assert_eq!(DomainError::PaymentDeclined.error_code(), "PAYMENT_DECLINED");
    assert_eq!(DomainError::Unauthorized.error_code(), "UNAUTHORIZED");
    assert_eq!(DomainError::Forbidden.error_code(), "FORBIDDEN");
    assert_eq!(DomainError::not_found("Product").error_code(), "NOT_FOUND");
    assert_eq!(
        DomainError::from(ValidationError::RequiredField {
            field: "name".to_string()
        })
        .error_code(),
        "VALIDATION_ERROR"
    );
    assert_eq!(
        DomainError::from(TokenError::InvalidSignature).error_code(),
        "TOKEN_INVALID"
    );
    assert_eq!(
        DomainError::from(AuthError::AuthenticationFailed).error_code(),
        "AUTHENTICATION_FAILED"
    );
}

#[test]
fn test_internal_shorthand_keeps_message() {
    let error = DomainError::internal("pool exhausted");
    assert_eq!(error.to_string(), "Internal error: pool exhausted");
}
