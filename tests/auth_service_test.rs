//! Authentication service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;

use tiffin_api::domain::User;
use tiffin_api::errors::AppError;
use tiffin_api::infra::{MockUnitOfWork, MockUserRepository};
use tiffin_api::services::{AuthService, Authenticator};

fn stored_user() -> User {
    User {
        id: "user-1".to_string(),
        email: "priya@example.com".to_string(),
        password: "plain-secret".to_string(),
        name: "Priya".to_string(),
        restaurant_name: "Saravana Bhavan".to_string(),
        phone: None,
        address: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn uow_with_email_lookup(user: Option<User>) -> MockUnitOfWork {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .returning(move |_| Ok(user.clone()));
    let users = Arc::new(users);

    let mut uow = MockUnitOfWork::new();
    uow.expect_users().returning(move || users.clone());
    uow
}

#[tokio::test]
async fn test_login_success() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("priya@example.com"))
        .returning(|_| Ok(Some(stored_user())));
    let users = Arc::new(users);

    let mut uow = MockUnitOfWork::new();
    uow.expect_users().returning(move || users.clone());

    let service = Authenticator::new(Arc::new(uow));
    let user = service
        .login("priya@example.com".to_string(), "plain-secret".to_string())
        .await
        .unwrap();

    assert_eq!(user.id, "user-1");
    assert_eq!(user.name, "Priya");
}

#[tokio::test]
async fn test_login_unknown_email_rejected() {
    let uow = uow_with_email_lookup(None);

    let service = Authenticator::new(Arc::new(uow));
    let result = service
        .login("nobody@example.com".to_string(), "whatever".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let uow = uow_with_email_lookup(Some(stored_user()));

    let service = Authenticator::new(Arc::new(uow));
    let result = service
        .login("priya@example.com".to_string(), "wrong".to_string())
        .await;

    // Same error as an unknown email
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_never_leaks_password_over_the_wire() {
    let uow = uow_with_email_lookup(Some(stored_user()));

    let service = Authenticator::new(Arc::new(uow));
    let user = service
        .login("priya@example.com".to_string(), "plain-secret".to_string())
        .await
        .unwrap();

    let body = serde_json::to_value(&user).unwrap();
    assert!(body.get("password").is_none());
    assert_eq!(body["email"], "priya@example.com");
}
