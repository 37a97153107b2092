//! Error types for authentication, token handling and input validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two cases are indistinguishable
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Incorrect old password")]
    IncorrectOldPassword,

    #[error("Inactive user")]
    InactiveUser,

    #[error("Password hashing failed")]
    PasswordHashingFailed,
}

/// Token-related errors
///
/// Signature, expiry, format and purpose failures all collapse into
/// `InvalidToken` so callers cannot learn which check rejected a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("Price must not be negative")]
    NegativePrice,

    #[error("Price must have at most {max_scale} decimal places")]
    PriceScale { max_scale: u32 },

    #[error("Price must not exceed {max}")]
    PriceTooLarge { max: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Invalid role: {value}")]
    InvalidRole { value: String },
}
