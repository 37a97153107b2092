//! MySQL repository implementations

mod order_repository_impl;
mod pizza_repository_impl;
mod user_repository_impl;

pub use order_repository_impl::MySqlOrderRepository;
pub use pizza_repository_impl::MySqlPizzaRepository;
pub use user_repository_impl::MySqlUserRepository;

use pd_core::errors::DomainError;

/// Translate a SQLx failure into a domain error
///
/// Unique-key violations become `Conflict` with `conflict_message`; everything
/// else is an internal error tagged with `context`.
pub(crate) fn map_sqlx_error(e: sqlx::Error, context: &str, conflict_message: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return DomainError::conflict(conflict_message);
        }
    }
    tracing::error!(error = %e, "{}", context);
    DomainError::internal(format!("{}: {}", context, e))
}

/// Column read failure while mapping a row
pub(crate) fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to get {}: {}", column, e))
}
