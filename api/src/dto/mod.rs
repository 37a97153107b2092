//! Request and response bodies of the HTTP API

pub mod auth;
pub mod order;
pub mod pizza;

pub use pd_shared::errors::{ErrorResponse, MessageResponse};
