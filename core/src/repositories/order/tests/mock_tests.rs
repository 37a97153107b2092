//! Unit tests for mock order repository

use rust_decimal_macros::dec;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;
use crate::repositories::order::{MockOrderRepository, OrderRepository};

fn order_for(user_id: Option<i64>) -> Order {
    let mut order = Order::new(user_id, Some("12 Baker St".to_string()));
    order.add_item(1, dec!(10.00), 2).unwrap();
    order
}

#[tokio::test]
async fn test_create_keeps_items() {
    let repo = MockOrderRepository::new();

    let stored = repo.create(&order_for(Some(1))).await.unwrap();
    assert_eq!(stored.id, 1);

    let found = repo.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.total_price(), dec!(20.00));
}

#[tokio::test]
async fn test_listings_are_newest_first() {
    let repo = MockOrderRepository::new();
    let first = repo.create(&order_for(Some(1))).await.unwrap();
    let guest = repo.create(&order_for(None)).await.unwrap();
    let second = repo.create(&order_for(Some(1))).await.unwrap();

    let all: Vec<i64> = repo.find_all().await.unwrap().iter().map(|o| o.id).collect();
    assert_eq!(all, vec![second.id, guest.id, first.id]);

    let mine: Vec<i64> = repo
        .find_by_user_id(1)
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(mine, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_update_status() {
    let repo = MockOrderRepository::new();
    let stored = repo.create(&order_for(None)).await.unwrap();

    let updated = repo.update_status(stored.id, "delivering").await.unwrap();
    assert_eq!(updated.status, "delivering");

    let missing = repo.update_status(42, "delivered").await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_ids_increase_monotonically() {
    let repo = MockOrderRepository::new();

    let first = repo.create(&order_for(None)).await.unwrap();
    let second = repo.create(&order_for(None)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}
