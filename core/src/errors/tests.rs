use super::*;

#[test]
fn test_messages_are_client_facing() {
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "Incorrect email or password"
    );
    assert_eq!(DomainError::not_found("Pizza").to_string(), "Pizza not found");
    assert_eq!(
        DomainError::conflict("Email already registered").to_string(),
        "Email already registered"
    );
}

#[test]
fn test_bridged_errors_are_transparent() {
    let err: DomainError = TokenError::InvalidToken.into();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    assert_eq!(err.to_string(), "Invalid or expired token");

    let err: DomainError = ValidationError::NonPositiveQuantity.into();
    assert_eq!(err.to_string(), "Quantity must be greater than zero");
}

#[test]
fn test_column_limit_messages() {
    let err = ValidationError::TooLong {
        field: "status".to_string(),
        max: 50,
    };
    assert_eq!(err.to_string(), "status must be at most 50 characters");
    assert_eq!(
        ValidationError::PriceScale { max_scale: 2 }.to_string(),
        "Price must have at most 2 decimal places"
    );
}
