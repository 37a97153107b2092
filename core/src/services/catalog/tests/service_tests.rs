//! Unit tests for the catalog service

use rust_decimal_macros::dec;
use std::sync::Arc;

use crate::domain::entities::pizza::{NewPizza, PizzaUpdate};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockPizzaRepository;
use crate::services::catalog::PizzaService;

async fn service_with_menu() -> PizzaService<MockPizzaRepository> {
    let service = PizzaService::new(Arc::new(MockPizzaRepository::new()));
    service
        .create(
            NewPizza::new("Margherita", dec!(10.00))
                .with_description("Tomato, mozzarella, basil"),
        )
        .await
        .unwrap();
    service
        .create(NewPizza::new("Lemonade", dec!(3.00)).with_category("drink"))
        .await
        .unwrap();
    service
}

#[tokio::test]
async fn test_list_by_category() {
    let service = service_with_menu().await;

    assert_eq!(service.list(None).await.unwrap().len(), 2);
    assert_eq!(service.list(Some("")).await.unwrap().len(), 2);

    let pizzas = service.list(Some("pizza")).await.unwrap();
    assert_eq!(pizzas.len(), 1);
    assert_eq!(pizzas[0].name, "Margherita");
}

#[tokio::test]
async fn test_create_duplicate_name_is_conflict() {
    let service = service_with_menu().await;
    let result = service.create(NewPizza::new("Margherita", dec!(1))).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let service = service_with_menu().await;
    let result = service.create(NewPizza::new("Freebie", dec!(-1))).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::NegativePrice))
    ));
}

#[tokio::test]
async fn test_create_rejects_prices_the_store_cannot_hold() {
    let service = service_with_menu().await;

    let sub_cent = service.create(NewPizza::new("Sub-cent", dec!(10.005))).await;
    assert!(matches!(
        sub_cent,
        Err(DomainError::ValidationErr(ValidationError::PriceScale { max_scale: 2 }))
    ));

    let huge = service
        .create(NewPizza::new("Gold leaf", dec!(123456789012.00)))
        .await;
    assert!(matches!(
        huge,
        Err(DomainError::ValidationErr(ValidationError::PriceTooLarge { .. }))
    ));

    let largest = service
        .create(NewPizza::new("Saffron", dec!(99999999.99)))
        .await
        .unwrap();
    assert_eq!(largest.price, dec!(99999999.99));

    // Trailing zeros do not count as extra precision
    assert!(service
        .create(NewPizza::new("Padded", dec!(4.500)))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_update_rejects_sub_cent_price_and_long_name() {
    let service = service_with_menu().await;

    let result = service
        .update(
            1,
            PizzaUpdate {
                price: Some(dec!(9.999)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::PriceScale { .. }))
    ));

    let result = service
        .update(
            1,
            PizzaUpdate {
                name: Some("n".repeat(256)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::TooLong { .. }))
    ));

    assert_eq!(service.get(1).await.unwrap().price, dec!(10.00));
}

#[tokio::test]
async fn test_search() {
    let service = service_with_menu().await;

    let found = service.search("MARG").await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(service.search("calzone").await.unwrap().is_empty());
    assert_eq!(service.search("  ").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_price_only_update_keeps_other_fields() {
    let service = service_with_menu().await;
    let original = service.search("Margherita").await.unwrap().remove(0);

    let updated = service
        .update(
            original.id,
            PizzaUpdate {
                price: Some(dec!(12.00)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, dec!(12.00));
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.category, original.category);
    assert_eq!(service.get(original.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_and_delete_missing_pizza() {
    let service = service_with_menu().await;

    let update = service.update(404, PizzaUpdate::default()).await;
    assert!(matches!(update, Err(DomainError::NotFound { .. })));

    let delete = service.delete(404).await;
    assert!(matches!(delete, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete() {
    let service = service_with_menu().await;
    let pizza = service.search("Lemonade").await.unwrap().remove(0);

    service.delete(pizza.id).await.unwrap();
    assert!(matches!(
        service.get(pizza.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
