//! Authentication service module
//!
//! This module provides the account flows:
//! - Registration with email verification links
//! - Login and access token issuance
//! - Password change, forgot-password and reset
//! - Privileged user creation with first-user bootstrap

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::{AccessToken, AuthService, VerifyEmailOutcome};
