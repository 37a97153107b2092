//! MySQL implementation of the OrderRepository trait.
//!
//! Orders and their items are stored in `orders` and `order_items`. An order
//! is inserted together with its items in a single transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use std::collections::HashMap;

use pd_core::domain::entities::order::{Order, OrderItem};
use pd_core::errors::DomainError;
use pd_core::repositories::OrderRepository;

use super::{column_error, map_sqlx_error};

const DUPLICATE_ORDER: &str = "Order already exists";

/// MySQL implementation of OrderRepository
pub struct MySqlOrderRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    /// Create a new MySQL order repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert an `orders` row to an Order without items
    fn row_to_order(row: &sqlx::mysql::MySqlRow) -> Result<Order, DomainError> {
        Ok(Order {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| column_error("user_id", e))?,
            status: row.try_get("status").map_err(|e| column_error("status", e))?,
            delivery_address: row
                .try_get("delivery_address")
                .map_err(|e| column_error("delivery_address", e))?,
            items: Vec::new(),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }

    /// Convert an `order_items` row to its order id and item
    fn row_to_item(row: &sqlx::mysql::MySqlRow) -> Result<(i64, OrderItem), DomainError> {
        let order_id: i64 = row
            .try_get("order_id")
            .map_err(|e| column_error("order_id", e))?;
        let item = OrderItem {
            product_id: row
                .try_get("product_id")
                .map_err(|e| column_error("product_id", e))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| column_error("price", e))?,
            quantity: row
                .try_get("quantity")
                .map_err(|e| column_error("quantity", e))?,
        };
        Ok((order_id, item))
    }

    /// Attach item rows to their orders, preserving the order of `orders`
    fn assemble(
        order_rows: &[sqlx::mysql::MySqlRow],
        item_rows: &[sqlx::mysql::MySqlRow],
    ) -> Result<Vec<Order>, DomainError> {
        let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            let (order_id, item) = Self::row_to_item(row)?;
            items_by_order.entry(order_id).or_default().push(item);
        }

        order_rows
            .iter()
            .map(|row| {
                let mut order = Self::row_to_order(row)?;
                order.items = items_by_order.remove(&order.id).unwrap_or_default();
                Ok(order)
            })
            .collect()
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create(&self, order: &Order) -> Result<Order, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to begin transaction", DUPLICATE_ORDER))?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (user_id, status, delivery_address, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(order.user_id)
        .bind(&order.status)
        .bind(&order.delivery_address)
        .bind(order.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create order", DUPLICATE_ORDER))?;

        let order_id = result.last_insert_id() as i64;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to create order item", DUPLICATE_ORDER))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to commit order", DUPLICATE_ORDER))?;

        Ok(Order {
            id: order_id,
            ..order.clone()
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let order_rows = sqlx::query(
            r#"
            SELECT id, user_id, status, delivery_address, created_at
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to find order", DUPLICATE_ORDER))?;

        if order_rows.is_empty() {
            return Ok(None);
        }

        let item_rows = sqlx::query(
            r#"
            SELECT order_id, product_id, quantity, price
            FROM order_items
            WHERE order_id = ?
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to load order items", DUPLICATE_ORDER))?;

        Ok(Self::assemble(&order_rows, &item_rows)?.into_iter().next())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, DomainError> {
        let order_rows = sqlx::query(
            r#"
            SELECT id, user_id, status, delivery_address, created_at
            FROM orders
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list orders", DUPLICATE_ORDER))?;

        let item_rows = sqlx::query(
            r#"
            SELECT oi.order_id, oi.product_id, oi.quantity, oi.price
            FROM order_items oi
            JOIN orders o ON o.id = oi.order_id
            WHERE o.user_id = ?
            ORDER BY oi.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to load order items", DUPLICATE_ORDER))?;

        Self::assemble(&order_rows, &item_rows)
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let order_rows = sqlx::query(
            r#"
            SELECT id, user_id, status, delivery_address, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to list orders", DUPLICATE_ORDER))?;

        let item_rows = sqlx::query(
            r#"
            SELECT order_id, product_id, quantity, price
            FROM order_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to load order items", DUPLICATE_ORDER))?;

        Self::assemble(&order_rows, &item_rows)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Order, DomainError> {
        sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to update order status", DUPLICATE_ORDER))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))
    }
}
