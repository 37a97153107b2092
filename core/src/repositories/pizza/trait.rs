//! Catalog repository trait.

use async_trait::async_trait;

use crate::domain::entities::pizza::{NewPizza, Pizza};
use crate::errors::DomainError;

/// Repository trait for catalog products
///
/// Listing and search results are ordered by id.
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// List products, optionally restricted to one category
    async fn find_all(&self, category: Option<&str>) -> Result<Vec<Pizza>, DomainError>;

    /// Find a product by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, DomainError>;

    /// Find a product by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Pizza>, DomainError>;

    /// Insert a new product
    ///
    /// # Returns
    /// * `Ok(Pizza)` - The stored product with its assigned id
    /// * `Err(DomainError::Conflict)` - The name is already taken
    async fn create(&self, pizza: NewPizza) -> Result<Pizza, DomainError>;

    /// Case-insensitive substring search on the product name
    ///
    /// The query is matched literally; `%` and `_` have no special meaning.
    async fn search(&self, query: &str) -> Result<Vec<Pizza>, DomainError>;

    /// Overwrite every column of an existing product
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No product with that id
    async fn update(&self, pizza: &Pizza) -> Result<Pizza, DomainError>;

    /// Delete a product
    ///
    /// # Returns
    /// * `Ok(true)` - Product was deleted
    /// * `Ok(false)` - Product not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
