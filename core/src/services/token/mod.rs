//! Token service module for JWT management
//!
//! Issues and verifies the three kinds of signed tokens the system uses:
//! access tokens, registration (email verification) tokens and password
//! reset tokens.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
