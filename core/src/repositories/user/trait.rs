//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Emails are expected to be normalized (trimmed, lowercase) by the caller.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use pd_core::repositories::UserRepository;
/// use pd_core::domain::entities::user::User;
/// use pd_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn update_password(&self, id: i64, hash: &str) -> Result<(), DomainError> { Ok(()) }
/// #   async fn count(&self) -> Result<u64, DomainError> { Ok(0) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its assigned id
    /// * `Err(DomainError::Conflict)` - The email is already taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace the stored password hash
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with that id
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError>;

    /// Count all users
    async fn count(&self) -> Result<u64, DomainError>;
}
