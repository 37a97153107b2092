//! Order repository trait.

use async_trait::async_trait;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

/// Repository trait for orders and their items
///
/// An order and its items are always written together. Listings are ordered
/// newest first.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order together with all of its items
    ///
    /// # Returns
    /// * `Ok(Order)` - The stored order with its assigned id
    async fn create(&self, order: &Order) -> Result<Order, DomainError>;

    /// Find an order with its items
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;

    /// All orders placed by one user
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, DomainError>;

    /// Every order in the store
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Replace the status of an order
    ///
    /// # Returns
    /// * `Ok(Order)` - The updated order
    /// * `Err(DomainError::NotFound)` - No order with that id
    async fn update_status(&self, id: i64, status: &str) -> Result<Order, DomainError>;
}
