//! Catalog service implementation

use std::sync::Arc;

use crate::domain::entities::pizza::{NewPizza, Pizza, PizzaUpdate};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PizzaRepository;

/// Use cases over the product catalog
pub struct PizzaService<P>
where
    P: PizzaRepository,
{
    pizza_repository: Arc<P>,
}

impl<P> PizzaService<P>
where
    P: PizzaRepository,
{
    pub fn new(pizza_repository: Arc<P>) -> Self {
        Self { pizza_repository }
    }

    /// List products, optionally for a single category
    pub async fn list(&self, category: Option<&str>) -> DomainResult<Vec<Pizza>> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.pizza_repository.find_all(category).await
    }

    pub async fn get(&self, id: i64) -> DomainResult<Pizza> {
        self.pizza_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Pizza"))
    }

    /// Add a product to the catalog
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Conflict)` - A product with this name exists
    pub async fn create(&self, pizza: NewPizza) -> DomainResult<Pizza> {
        pizza.validate()?;

        if self
            .pizza_repository
            .find_by_name(pizza.name.trim())
            .await?
            .is_some()
        {
            return Err(DomainError::conflict("Pizza with this name already exists"));
        }

        let created = self.pizza_repository.create(pizza).await?;
        tracing::info!(pizza_id = created.id, name = %created.name, "Pizza created");
        Ok(created)
    }

    /// Case-insensitive name search; a blank query lists everything
    pub async fn search(&self, query: &str) -> DomainResult<Vec<Pizza>> {
        let query = query.trim();
        if query.is_empty() {
            return self.pizza_repository.find_all(None).await;
        }
        self.pizza_repository.search(query).await
    }

    /// Apply a partial update
    ///
    /// Renaming onto an existing name is not checked here; the store's
    /// unique constraint reports it as a conflict.
    pub async fn update(&self, id: i64, update: PizzaUpdate) -> DomainResult<Pizza> {
        update.validate()?;

        let mut pizza = self.get(id).await?;
        if update.is_empty() {
            return Ok(pizza);
        }

        update.apply(&mut pizza);
        let updated = self.pizza_repository.update(&pizza).await?;
        tracing::info!(pizza_id = updated.id, "Pizza updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.pizza_repository.delete(id).await? {
            return Err(DomainError::not_found("Pizza"));
        }
        tracing::info!(pizza_id = id, "Pizza deleted");
        Ok(())
    }
}
