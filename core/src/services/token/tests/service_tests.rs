//! Unit tests for the token service

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{Claims, TokenPurpose};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("test-secret")).unwrap()
}

fn assert_invalid(result: Result<Claims, DomainError>) {
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}

#[test]
fn test_access_token_round_trip() {
    let service = service();
    let token = service.issue_access_token(17).unwrap();

    assert_eq!(service.verify_access_token(&token).unwrap(), 17);
    assert_eq!(service.access_token_expires_in(), 60 * 60);
}

#[test]
fn test_registration_token_carries_pending_account() {
    let service = service();
    let token = service
        .issue_registration_token("a@b.com", "$2b$hash", Role::Customer)
        .unwrap();

    let claims = service.verify(&token, TokenPurpose::Registration).unwrap();
    assert_eq!(claims.sub, "a@b.com");
    assert_eq!(claims.password_hash.as_deref(), Some("$2b$hash"));
    assert_eq!(claims.role, Some(Role::Customer));
    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[test]
fn test_purpose_mismatch_is_rejected() {
    let service = service();
    let reset = service.issue_reset_token("a@b.com").unwrap();

    assert_invalid(service.verify(&reset, TokenPurpose::Registration));
    assert_invalid(service.verify(&reset, TokenPurpose::Access));
    assert!(service.verify(&reset, TokenPurpose::ResetPassword).is_ok());
}

#[test]
fn test_reset_token_cannot_be_used_as_access_token() {
    let service = service();
    let reset = service.issue_reset_token("a@b.com").unwrap();
    assert!(service.verify_access_token(&reset).is_err());
}

#[test]
fn test_wrong_secret_is_rejected() {
    let issuer = service();
    let other = TokenService::new(TokenServiceConfig::new("another-secret")).unwrap();
    let token = issuer.issue_access_token(1).unwrap();

    assert_invalid(other.verify(&token, TokenPurpose::Access));
}

#[test]
fn test_expired_token_is_rejected() {
    let service = service();
    let claims = Claims::access(1, -5);
    let token = service.encode_jwt(&claims).unwrap();

    assert_invalid(service.verify(&token, TokenPurpose::Access));
}

#[test]
fn test_malformed_token_is_rejected() {
    let service = service();
    assert_invalid(service.verify("not.a.jwt", TokenPurpose::Access));
    assert_invalid(service.verify("", TokenPurpose::Access));
}

#[test]
fn test_asymmetric_algorithm_is_refused() {
    let config = TokenServiceConfig {
        algorithm: Algorithm::RS256,
        ..TokenServiceConfig::new("secret")
    };
    assert!(matches!(
        TokenService::new(config),
        Err(DomainError::Internal { .. })
    ));
}
