//! Domain entities representing core business objects.

pub mod order;
pub mod pizza;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

use crate::errors::ValidationError;

// Re-export commonly used types
pub use order::{Order, OrderItem, OrderLine, DEFAULT_ORDER_STATUS};
pub use pizza::{NewPizza, Pizza, PizzaUpdate, DEFAULT_CATEGORY};
pub use token::{Claims, TokenPurpose};
pub use user::{Role, User};

/// Column limits count characters, not bytes
pub(crate) fn validate_length(
    field: &str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}
