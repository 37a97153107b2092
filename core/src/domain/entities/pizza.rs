//! Catalog product entity.
//!
//! Everything on the menu is stored as a "pizza" record; drinks and desserts
//! are distinguished only by their category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validate_length;
use crate::errors::ValidationError;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "pizza";

/// Prices are stored as `DECIMAL(10, 2)`
pub const PRICE_SCALE: u32 = 2;
pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_CATEGORY_LENGTH: usize = 50;
pub const MAX_IMAGE_URL_LENGTH: usize = 1024;

/// Largest price the store can hold
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
}

/// Data needed to add a product to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPizza {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewPizza {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            description: String::new(),
            category: default_category(),
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_length("category", &self.category, MAX_CATEGORY_LENGTH)?;
        if let Some(image_url) = &self.image_url {
            validate_length("image_url", image_url, MAX_IMAGE_URL_LENGTH)?;
        }
        Ok(())
    }

    /// Builds the stored entity once the store has assigned an id
    pub fn into_pizza(self, id: i64) -> Pizza {
        let category = if self.category.trim().is_empty() {
            default_category()
        } else {
            self.category
        };
        Pizza {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            description: self.description,
            category,
            image_url: self.image_url,
        }
    }
}

/// Partial update: only fields that are `Some` overwrite the stored values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PizzaUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(category) = &self.category {
            validate_length("category", category, MAX_CATEGORY_LENGTH)?;
        }
        if let Some(image_url) = &self.image_url {
            validate_length("image_url", image_url, MAX_IMAGE_URL_LENGTH)?;
        }
        Ok(())
    }

    /// Applies the present fields to `pizza`
    pub fn apply(&self, pizza: &mut Pizza) {
        if let Some(name) = &self.name {
            pizza.name = name.trim().to_string();
        }
        if let Some(price) = self.price {
            pizza.price = price;
        }
        if let Some(description) = &self.description {
            pizza.description = description.clone();
        }
        if let Some(category) = &self.category {
            pizza.category = if category.trim().is_empty() {
                default_category()
            } else {
                category.clone()
            };
        }
        if let Some(image_url) = &self.image_url {
            pizza.image_url = Some(image_url.clone());
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    validate_length("name", name.trim(), MAX_NAME_LENGTH)
}

fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::NegativePrice);
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::PriceScale {
            max_scale: PRICE_SCALE,
        });
    }
    let max = max_price();
    if price > max {
        return Err(ValidationError::PriceTooLarge {
            max: max.to_string(),
        });
    }
    Ok(())
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
