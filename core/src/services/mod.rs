//! Business services containing domain logic and use cases.

pub mod auth;
pub mod catalog;
pub mod email;
pub mod order;
pub mod token;

// Re-export commonly used types
pub use auth::{AccessToken, AuthService, AuthServiceConfig, PasswordHasher, VerifyEmailOutcome};
pub use catalog::PizzaService;
pub use email::EmailServiceTrait;
pub use order::OrderService;
pub use token::{TokenService, TokenServiceConfig};
