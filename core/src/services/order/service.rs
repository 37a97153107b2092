//! Order service implementation

use std::sync::Arc;

use crate::domain::entities::order::{
    validate_delivery_address, validate_status, Order, OrderLine,
};
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{OrderRepository, PizzaRepository};

/// Use cases over orders
pub struct OrderService<O, P>
where
    O: OrderRepository,
    P: PizzaRepository,
{
    order_repository: Arc<O>,
    pizza_repository: Arc<P>,
}

impl<O, P> OrderService<O, P>
where
    O: OrderRepository,
    P: PizzaRepository,
{
    pub fn new(order_repository: Arc<O>, pizza_repository: Arc<P>) -> Self {
        Self {
            order_repository,
            pizza_repository,
        }
    }

    /// Place an order
    ///
    /// Each product is resolved to its current price, which is copied into the
    /// order item so later catalog changes do not alter the order.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Owner of the order, `None` for guest checkout
    /// * `lines` - Requested products and quantities
    /// * `delivery_address` - Free-form address
    ///
    /// # Returns
    ///
    /// * `Ok(Order)` - The stored order with its id
    /// * `Err(DomainError::NotFound)` - A product id does not exist
    /// * `Err(ValidationError)` - No lines, or a quantity ≤ 0
    pub async fn create_order(
        &self,
        user_id: Option<i64>,
        lines: &[OrderLine],
        delivery_address: Option<String>,
    ) -> DomainResult<Order> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyOrder.into());
        }
        if let Some(address) = &delivery_address {
            validate_delivery_address(address)?;
        }

        let mut order = Order::new(user_id, delivery_address);
        for line in lines {
            if line.quantity <= 0 {
                return Err(ValidationError::NonPositiveQuantity.into());
            }
            let pizza = self
                .pizza_repository
                .find_by_id(line.product_id)
                .await?
                .ok_or_else(|| DomainError::not_found(format!("Pizza {}", line.product_id)))?;
            order.add_item(pizza.id, pizza.price, line.quantity)?;
        }

        let order = self.order_repository.create(&order).await?;
        tracing::info!(
            order_id = order.id,
            user_id = order.user_id,
            items = order.items.len(),
            total = %order.total_price(),
            "Order created"
        );
        Ok(order)
    }

    /// Orders visible to `user`: everything for staff, otherwise their own
    pub async fn list_orders(&self, user: &User) -> DomainResult<Vec<Order>> {
        if user.role.can_view_all_orders() {
            self.order_repository.find_all().await
        } else {
            self.order_repository.find_by_user_id(user.id).await
        }
    }

    /// Set the status of an order; admin only
    ///
    /// Any non-blank status string that fits the column is accepted.
    pub async fn update_status(
        &self,
        actor: &User,
        order_id: i64,
        status: &str,
    ) -> DomainResult<Order> {
        if actor.role != Role::Admin {
            return Err(DomainError::Forbidden {
                message: "Only admins can update order status".to_string(),
            });
        }

        let status = status.trim();
        validate_status(status)?;

        let order = self.order_repository.update_status(order_id, status).await?;
        tracing::info!(order_id, status, changed_by = actor.id, "Order status changed");
        Ok(order)
    }
}
