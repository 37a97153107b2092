use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pd_core::domain::entities::pizza::{NewPizza, Pizza, PizzaUpdate, DEFAULT_CATEGORY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePizzaRequest {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<CreatePizzaRequest> for NewPizza {
    fn from(request: CreatePizzaRequest) -> Self {
        NewPizza {
            name: request.name,
            price: request.price,
            description: request.description,
            category: request
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image_url: request.image_url,
        }
    }
}

/// Partial update; omitted fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePizzaRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdatePizzaRequest> for PizzaUpdate {
    fn from(request: UpdatePizzaRequest) -> Self {
        PizzaUpdate {
            name: request.name,
            price: request.price,
            description: request.description,
            category: request.category,
            image_url: request.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PizzaListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaSearchQuery {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PizzaResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            price: pizza.price,
            description: pizza.description,
            category: pizza.category,
            image_url: pizza.image_url,
        }
    }
}
