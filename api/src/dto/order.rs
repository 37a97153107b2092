use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pd_core::domain::entities::order::{Order, OrderItem, OrderLine};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

impl From<OrderItemRequest> for OrderLine {
    fn from(item: OrderItemRequest) -> Self {
        OrderLine {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemRequest>,
    #[serde(default)]
    pub delivery_address: Option<String>,
}

impl CreateOrderRequest {
    pub fn lines(&self) -> Vec<OrderLine> {
        self.items.iter().copied().map(OrderLine::from).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderResponse {
    pub order_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub status: String,
    pub delivery_address: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            status: order.status.clone(),
            delivery_address: order.delivery_address.clone(),
            items: order.items.iter().map(OrderItemResponse::from).collect(),
            total_price: order.total_price(),
            created_at: order.created_at,
        }
    }
}
