//! Credential validation rules

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;

pub const MAX_USERNAME_LENGTH: usize = 150;

/// Letters, digits and `@ . + - _`
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9@.+_-]+$").unwrap());

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "username".to_string(),
        });
    }

    let length = username.chars().count();
    if length > MAX_USERNAME_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "username".to_string(),
            min: 1,
            max: MAX_USERNAME_LENGTH,
            actual: length,
        });
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
        });
    }

    Ok(())
}

pub fn validate_password(password: &str, min_length: usize) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        });
    }

    let length = password.chars().count();
    if length < min_length {
        return Err(ValidationError::InvalidLength {
            field: "password".to_string(),
            min: min_length,
            max: usize::MAX,
            actual: length,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["alice", "bob.smith", "a+b@shop", "x_y-z", "7"] {
            assert!(validate_username(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(matches!(
            validate_username(""),
            Err(ValidationError::RequiredField { .. })
        ));
        assert!(matches!(
            validate_username("has space"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_username(&"a".repeat(151)),
            Err(ValidationError::InvalidLength { actual: 151, .. })
        ));
        assert!(validate_username(&"a".repeat(150)).is_ok());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345678", 8).is_ok());
        assert!(matches!(
            validate_password("short", 8),
            Err(ValidationError::InvalidLength { actual: 5, .. })
        ));
    }
}
