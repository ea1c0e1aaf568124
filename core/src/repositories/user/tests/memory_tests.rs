//! Unit tests for the in-memory user repository

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryUserRepository::new();
    let user = User::new("alice".to_string(), None, "hash".to_string());

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.username), Some("alice".to_string()));

    let by_name = repo.find_by_username("alice").await.unwrap();
    assert_eq!(by_name.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_duplicate_username() {
    let repo = InMemoryUserRepository::new();
    repo.create(User::new("alice".to_string(), None, "a".to_string()))
        .await
        .unwrap();

    let result = repo
        .create(User::new("alice".to_string(), None, "b".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_username_is_case_sensitive() {
    let repo = InMemoryUserRepository::new();
    repo.create(User::new("Alice".to_string(), None, "a".to_string()))
        .await
        .unwrap();

    assert!(repo.exists_by_username("Alice").await.unwrap());
    assert!(!repo.exists_by_username("alice").await.unwrap());
}

#[tokio::test]
async fn test_find_missing() {
    let repo = InMemoryUserRepository::new();

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repo.find_by_username("ghost").await.unwrap().is_none());
}
