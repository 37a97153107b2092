//! Mock implementation of PizzaRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::pizza::{NewPizza, Pizza};
use crate::errors::DomainError;

use super::trait_::PizzaRepository;

/// In-memory catalog keyed by id
pub struct MockPizzaRepository {
    pizzas: Arc<RwLock<BTreeMap<i64, Pizza>>>,
    /// Ids are never reused, like AUTO_INCREMENT
    next_id: Arc<AtomicI64>,
}

impl MockPizzaRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            pizzas: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for MockPizzaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PizzaRepository for MockPizzaRepository {
    async fn find_all(&self, category: Option<&str>) -> Result<Vec<Pizza>, DomainError> {
        let pizzas = self.pizzas.read().await;
        Ok(pizzas
            .values()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, DomainError> {
        let pizzas = self.pizzas.read().await;
        Ok(pizzas.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pizza>, DomainError> {
        let pizzas = self.pizzas.read().await;
        Ok(pizzas.values().find(|p| p.name == name).cloned())
    }

    async fn create(&self, pizza: NewPizza) -> Result<Pizza, DomainError> {
        let mut pizzas = self.pizzas.write().await;

        if pizzas.values().any(|p| p.name == pizza.name.trim()) {
            return Err(DomainError::conflict("Pizza with this name already exists"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = pizza.into_pizza(id);
        pizzas.insert(id, stored.clone());
        Ok(stored)
    }

    async fn search(&self, query: &str) -> Result<Vec<Pizza>, DomainError> {
        let needle = query.to_lowercase();
        let pizzas = self.pizzas.read().await;
        Ok(pizzas
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, pizza: &Pizza) -> Result<Pizza, DomainError> {
        let mut pizzas = self.pizzas.write().await;
        let stored = pizzas
            .get_mut(&pizza.id)
            .ok_or_else(|| DomainError::not_found("Pizza"))?;
        *stored = pizza.clone();
        Ok(pizza.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut pizzas = self.pizzas.write().await;
        Ok(pizzas.remove(&id).is_some())
    }
}
