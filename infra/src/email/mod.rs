//! Email Service Module
//!
//! Delivery backends for the verification and password reset emails sent
//! by the authentication flows.
//!
//! ## Backends
//!
//! - **SMTP**: Real delivery through lettre over STARTTLS
//! - **Log**: Writes the message to the tracing output, for development
//! - **Mock**: Records messages in memory, for tests

pub mod log;
pub mod smtp;
pub mod templates;

#[cfg(any(test, feature = "mock-services"))]
pub mod mock;

pub use log::LogEmailService;
pub use smtp::SmtpEmailService;
pub use templates::{EmailKind, RenderedEmail};

#[cfg(any(test, feature = "mock-services"))]
pub use mock::{MockEmailService, SentMessage};


use std::sync::Arc;

use pd_core::services::EmailServiceTrait;
use pd_shared::config::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

/// Create an email service based on configuration
///
/// Returns the implementation selected by `config.provider`. Building the
/// SMTP transport fails when the relay host cannot be resolved into a
/// STARTTLS relay.
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailServiceTrait>, InfrastructureError> {
    match config.provider {
        EmailProvider::Smtp => {
            tracing::info!(
                host = %config.smtp_host,
                port = config.smtp_port,
                "Using SMTP email service"
            );
            Ok(Arc::new(SmtpEmailService::new(config)?))
        }
        EmailProvider::Log => {
            tracing::info!("Using log email service, no emails will be delivered");
            Ok(Arc::new(LogEmailService::new()))
        }
    }
}
