//! Unit tests for authentication service

use crate::domain::entities::token::TokenPurpose;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::UserRepository;
use crate::services::auth::VerifyEmailOutcome;

use super::mocks::*;

async fn registered(h: &Harness, email: &str, password: &str) -> i64 {
    h.service.register(email, password).await.unwrap();
    let token = h.email.last().unwrap().token();
    match h.service.verify_email(&token).await.unwrap() {
        VerifyEmailOutcome::Registered(user) => user.id,
        VerifyEmailOutcome::AlreadyRegistered => panic!("expected a new account"),
    }
}

#[tokio::test]
async fn test_register_sends_link_without_creating_user() {
    let h = harness();

    h.service.register("New@Example.com", "secret").await.unwrap();

    assert_eq!(h.users.count().await.unwrap(), 0);
    match h.email.last().unwrap() {
        SentEmail::Verification { to, link } => {
            assert_eq!(to, "new@example.com");
            assert!(link.starts_with("http://front.test/verify-email?token="));
        }
        other => panic!("unexpected email {:?}", other),
    }
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
    let h = harness();
    registered(&h, "a@b.com", "pw").await;

    let result = h.service.register("a@b.com", "other").await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let h = harness();
    let result = h.service.register("not-an-email", "pw").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn test_register_rejects_email_longer_than_column() {
    let h = harness();
    let email = format!("{}@example.com", "a".repeat(250));
    let result = h.service.register(&email, "pw").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::TooLong { max: 255, .. }))
    ));
}

#[tokio::test]
async fn test_register_succeeds_when_email_delivery_fails() {
    let h = harness_with_email(MockEmailService::failing());

    assert!(h.service.register("a@b.com", "pw").await.is_ok());
    assert!(h.email.last().is_none());
}

#[tokio::test]
async fn test_verify_email_creates_verified_user_and_first_is_admin() {
    let h = harness();

    let first = registered(&h, "first@example.com", "pw").await;
    let second = registered(&h, "second@example.com", "pw").await;

    let first = h.users.find_by_id(first).await.unwrap().unwrap();
    let second = h.users.find_by_id(second).await.unwrap().unwrap();
    assert_eq!(first.role, Role::Admin);
    assert!(first.is_verified);
    assert_eq!(second.role, Role::Customer);
}

#[tokio::test]
async fn test_verify_email_is_idempotent() {
    let h = harness();
    h.service.register("a@b.com", "pw").await.unwrap();
    let token = h.email.last().unwrap().token();

    let first = h.service.verify_email(&token).await.unwrap();
    let second = h.service.verify_email(&token).await.unwrap();

    assert!(matches!(first, VerifyEmailOutcome::Registered(_)));
    assert_eq!(second, VerifyEmailOutcome::AlreadyRegistered);
    assert_eq!(h.users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_verify_email_rejects_other_tokens() {
    let h = harness();
    let reset = h.tokens.issue_reset_token("a@b.com").unwrap();

    for token in [reset.as_str(), "garbage"] {
        let result = h.service.verify_email(token).await;
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }
}

#[tokio::test]
async fn test_login_issues_token_for_user_id() {
    let h = harness();
    let user_id = registered(&h, "a@b.com", "pw").await;

    let token = h.service.login("A@B.com", "pw").await.unwrap();

    assert_eq!(token.token_type, "bearer");
    assert_eq!(h.tokens.verify_access_token(&token.access_token).unwrap(), user_id);
    let user = h.service.authenticate(&token.access_token).await.unwrap();
    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let h = harness();
    registered(&h, "a@b.com", "pw").await;

    let wrong_password = h.service.login("a@b.com", "nope").await.unwrap_err();
    let unknown_user = h.service.login("x@b.com", "pw").await.unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_change_password() {
    let h = harness();
    let user_id = registered(&h, "a@b.com", "old").await;

    let wrong = h.service.change_password(user_id, "bad", "new").await;
    assert!(matches!(
        wrong,
        Err(DomainError::Auth(AuthError::IncorrectOldPassword))
    ));

    h.service.change_password(user_id, "old", "new").await.unwrap();
    assert!(h.service.login("a@b.com", "old").await.is_err());
    assert!(h.service.login("a@b.com", "new").await.is_ok());
}

#[tokio::test]
async fn test_forgot_and_reset_password() {
    let h = harness();
    registered(&h, "a@b.com", "old").await;

    h.service.forgot_password("a@b.com").await.unwrap();
    let email = h.email.last().unwrap();
    assert!(matches!(email, SentEmail::PasswordReset { .. }));
    assert!(email.link().starts_with("http://front.test/reset-password?token="));

    h.service.reset_password(&email.token(), "fresh").await.unwrap();
    assert!(h.service.login("a@b.com", "fresh").await.is_ok());
}

#[tokio::test]
async fn test_forgot_password_unknown_email_is_not_found() {
    let h = harness();
    let result = h.service.forgot_password("ghost@b.com").await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_reset_password_rejects_wrong_purpose_and_unknown_user() {
    let h = harness();
    registered(&h, "a@b.com", "pw").await;

    let access = h.service.login("a@b.com", "pw").await.unwrap().access_token;
    let result = h.service.reset_password(&access, "x").await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));

    let ghost = h.tokens.issue_reset_token("ghost@b.com").unwrap();
    let result = h.service.reset_password(&ghost, "x").await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let registration = h
        .tokens
        .issue_registration_token("a@b.com", "hash", Role::Customer)
        .unwrap();
    assert!(h.tokens.verify(&registration, TokenPurpose::ResetPassword).is_err());
}

#[tokio::test]
async fn test_create_user_first_is_admin_then_requires_admin() {
    let h = harness();

    let admin = h.service.create_user(None, "boss@b.com", "pw").await.unwrap();
    assert_eq!(admin.role, Role::Admin);

    let anonymous = h.service.create_user(None, "x@b.com", "pw").await;
    assert!(matches!(anonymous, Err(DomainError::Forbidden { .. })));

    let staff = h
        .service
        .create_user(Some(&admin), "staff@b.com", "pw")
        .await
        .unwrap();
    assert_eq!(staff.role, Role::Employee);

    let by_staff = h.service.create_user(Some(&staff), "y@b.com", "pw").await;
    assert!(matches!(by_staff, Err(DomainError::Forbidden { .. })));

    let duplicate = h.service.create_user(Some(&admin), "staff@b.com", "pw").await;
    assert!(matches!(duplicate, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_authenticate_rejects_bad_tokens() {
    let h = harness();

    let result = h.service.authenticate("garbage").await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));

    // Valid signature, but the user does not exist
    let orphan = h.tokens.issue_access_token(99).unwrap();
    let result = h.service.authenticate(&orphan).await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));
}
