//! Authentication route handlers
//!
//! This module contains all account-related endpoints including:
//! - Registration with email verification
//! - Login (JSON body and OAuth2 password form)
//! - Current user profile
//! - Privileged user creation
//! - Password change, forgot and reset

pub mod create_user;
pub mod login;
pub mod me;
pub mod password;
pub mod register;
pub mod verify_email;

pub use create_user::create_user;
pub use login::{login, token};
pub use me::me;
pub use password::{change_password, forgot_password, reset_password};
pub use register::register;
pub use verify_email::verify_email;
