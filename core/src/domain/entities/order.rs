//! Order aggregate: an order owns its items and derives its total from them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validate_length;
use crate::errors::ValidationError;

/// Status every new order starts in
pub const DEFAULT_ORDER_STATUS: &str = "pending";

pub const MAX_STATUS_LENGTH: usize = 50;
pub const MAX_DELIVERY_ADDRESS_LENGTH: usize = 1024;

/// Any non-blank status that fits the column is accepted
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "status".to_string(),
        });
    }
    validate_length("status", status, MAX_STATUS_LENGTH)
}

pub fn validate_delivery_address(address: &str) -> Result<(), ValidationError> {
    validate_length("delivery_address", address, MAX_DELIVERY_ADDRESS_LENGTH)
}

/// One line of an order with the unit price captured at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub price: Decimal,
    pub quantity: i32,
}

impl OrderItem {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A requested product and quantity, before prices are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the store; `0` until the order is saved
    pub id: i64,

    /// `None` for guest checkout
    pub user_id: Option<i64>,

    pub status: String,

    pub delivery_address: Option<String>,

    pub items: Vec<OrderItem>,

    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Starts a new, empty order in the `pending` status
    pub fn new(user_id: Option<i64>, delivery_address: Option<String>) -> Self {
        Self {
            id: 0,
            user_id,
            status: DEFAULT_ORDER_STATUS.to_string(),
            delivery_address,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item, rejecting zero or negative quantities
    pub fn add_item(
        &mut self,
        product_id: i64,
        price: Decimal,
        quantity: i32,
    ) -> Result<(), ValidationError> {
        if quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity);
        }
        self.items.push(OrderItem {
            product_id,
            price,
            quantity,
        });
        Ok(())
    }

    /// Sum of price × quantity over all items
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }
}
