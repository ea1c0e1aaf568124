//! Unit tests for user entity

use crate::domain::entities::user::{Role, User};

#[test]
fn test_new_user_is_customer() {
    let user = User::new(
        "alice".to_string(),
        Some("alice@example.com".to_string()),
        "hash".to_string(),
    );

    assert_eq!(user.username, "alice");
    assert_eq!(user.role, Role::Customer);
    assert!(!user.is_staff());
}

#[test]
fn test_new_admin_is_staff() {
    let admin = User::new_admin("root".to_string(), "hash".to_string());

    assert_eq!(admin.role, Role::Admin);
    assert!(admin.is_staff());
    assert!(admin.email.is_none());
}

#[test]
fn test_password_hash_not_serialized() {
    let user = User::new("bob".to_string(), None, "secret-hash".to_string());
    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("secret-hash"));
    assert!(json.contains("\"role\":\"customer\""));
}

#[test]
fn test_role_parsing() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
    assert!("owner".parse::<Role>().is_err());
}
