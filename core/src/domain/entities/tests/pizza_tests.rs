//! Unit tests for catalog entities

use rust_decimal_macros::dec;

use crate::domain::entities::pizza::{NewPizza, Pizza, PizzaUpdate, DEFAULT_CATEGORY};
use crate::errors::ValidationError;

fn margherita() -> Pizza {
    NewPizza::new("Margherita", dec!(10.00))
        .with_description("Classic tomato and mozzarella")
        .into_pizza(1)
}

#[test]
fn test_new_pizza_defaults() {
    let pizza = margherita();
    assert_eq!(pizza.id, 1);
    assert_eq!(pizza.category, DEFAULT_CATEGORY);
    assert!(pizza.image_url.is_none());
}

#[test]
fn test_blank_category_falls_back_to_default() {
    let pizza = NewPizza::new("Cola", dec!(2.50)).with_category("  ").into_pizza(3);
    assert_eq!(pizza.category, DEFAULT_CATEGORY);
}

#[test]
fn test_validation() {
    assert!(NewPizza::new("Hawaiian", dec!(0)).validate().is_ok());
    assert_eq!(
        NewPizza::new("   ", dec!(10)).validate(),
        Err(ValidationError::RequiredField {
            field: "name".to_string()
        })
    );
    assert_eq!(
        NewPizza::new("Hawaiian", dec!(-1)).validate(),
        Err(ValidationError::NegativePrice)
    );
}

#[test]
fn test_partial_update_only_touches_present_fields() {
    let mut pizza = margherita();
    let update = PizzaUpdate {
        price: Some(dec!(11.25)),
        ..Default::default()
    };

    update.apply(&mut pizza);

    assert_eq!(pizza.price, dec!(11.25));
    assert_eq!(pizza.name, "Margherita");
    assert_eq!(pizza.description, "Classic tomato and mozzarella");
    assert_eq!(pizza.category, DEFAULT_CATEGORY);
}

#[test]
fn test_update_validation_and_emptiness() {
    assert!(PizzaUpdate::default().is_empty());

    let bad = PizzaUpdate {
        price: Some(dec!(-0.01)),
        ..Default::default()
    };
    assert!(!bad.is_empty());
    assert_eq!(bad.validate(), Err(ValidationError::NegativePrice));
}

#[test]
fn test_deserialize_new_pizza_with_defaults() {
    let json = r#"{"name": "Veggie", "price": 11.0}"#;
    let pizza: NewPizza = serde_json::from_str(json).unwrap();

    assert_eq!(pizza.price, dec!(11.0));
    assert_eq!(pizza.category, DEFAULT_CATEGORY);
    assert_eq!(pizza.description, "");
}

#[test]
fn test_blank_category_update_falls_back_to_default() {
    let mut pizza = NewPizza::new("Cola", dec!(2.50))
        .with_category("drinks")
        .into_pizza(2);
    let update = PizzaUpdate {
        category: Some("   ".to_string()),
        ..Default::default()
    };

    update.apply(&mut pizza);

    assert_eq!(pizza.category, DEFAULT_CATEGORY);
}

#[test]
fn test_length_limits_count_characters() {
    let name = "é".repeat(255);
    assert!(NewPizza::new(name, dec!(1)).validate().is_ok());

    assert_eq!(
        NewPizza::new("Cola", dec!(1))
            .with_category("c".repeat(51))
            .validate(),
        Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 50
        })
    );
}
