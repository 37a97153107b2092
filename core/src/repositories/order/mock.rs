//! Mock implementation of OrderRepository for testing

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

use super::trait_::OrderRepository;

/// In-memory order store keyed by id
pub struct MockOrderRepository {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
    /// Ids are never reused, like AUTO_INCREMENT
    next_id: Arc<AtomicI64>,
}

impl MockOrderRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn create(&self, order: &Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        let mut stored = order.clone();
        stored.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        orders.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        // Ids grow with insertion, so reverse id order is newest first
        Ok(orders
            .values()
            .rev()
            .filter(|o| o.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.values().rev().cloned().collect())
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Order"))?;
        order.status = status.to_string();
        Ok(order.clone())
    }
}
