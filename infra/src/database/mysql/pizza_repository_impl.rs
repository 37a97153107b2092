//! MySQL implementation of the PizzaRepository trait.
//!
//! Products live in the `products` table; the name column carries a unique
//! key, so duplicate names surface as `Conflict`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};

use pd_core::domain::entities::pizza::{NewPizza, Pizza};
use pd_core::errors::DomainError;
use pd_core::repositories::PizzaRepository;
use pd_shared::utils::validation::escape_like;

use super::{column_error, map_sqlx_error};

const DUPLICATE_NAME: &str = "Pizza with this name already exists";

/// MySQL implementation of PizzaRepository
pub struct MySqlPizzaRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPizzaRepository {
    /// Create a new MySQL pizza repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Pizza entity
    fn row_to_pizza(row: &sqlx::mysql::MySqlRow) -> Result<Pizza, DomainError> {
        Ok(Pizza {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| column_error("price", e))?,
            description: row
                .try_get("description")
                .map_err(|e| column_error("description", e))?,
            category: row
                .try_get("category")
                .map_err(|e| column_error("category", e))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| column_error("image_url", e))?,
        })
    }

    fn rows_to_pizzas(rows: &[sqlx::mysql::MySqlRow]) -> Result<Vec<Pizza>, DomainError> {
        rows.iter().map(Self::row_to_pizza).collect()
    }
}

#[async_trait]
impl PizzaRepository for MySqlPizzaRepository {
    async fn find_all(&self, category: Option<&str>) -> Result<Vec<Pizza>, DomainError> {
        let rows = match category {
            Some(category) => {
                sqlx::query(
                    r#"
                    SELECT id, name, price, description, category, image_url
                    FROM products
                    WHERE category = ?
                    ORDER BY id
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, name, price, description, category, image_url
                    FROM products
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| map_sqlx_error(e, "Failed to list pizzas", DUPLICATE_NAME))?;

        Self::rows_to_pizzas(&rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pizza>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, description, category, image_url
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to find pizza", DUPLICATE_NAME))?;

        row.as_ref().map(Self::row_to_pizza).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pizza>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, description, category, image_url
            FROM products
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to find pizza", DUPLICATE_NAME))?;

        row.as_ref().map(Self::row_to_pizza).transpose()
    }

    async fn create(&self, pizza: NewPizza) -> Result<Pizza, DomainError> {
        // Normalize name and category the same way the stored entity will
        let pizza = pizza.into_pizza(0);

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price, description, category, image_url)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&pizza.name)
        .bind(pizza.price)
        .bind(&pizza.description)
        .bind(&pizza.category)
        .bind(&pizza.image_url)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create pizza", DUPLICATE_NAME))?;

        Ok(Pizza {
            id: result.last_insert_id() as i64,
            ..pizza
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Pizza>, DomainError> {
        // Backslash is MySQL's default LIKE escape character
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));

        let rows = sqlx::query(
            r#"
            SELECT id, name, price, description, category, image_url
            FROM products
            WHERE LOWER(name) LIKE ?
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to search pizzas", DUPLICATE_NAME))?;

        Self::rows_to_pizzas(&rows)
    }

    async fn update(&self, pizza: &Pizza) -> Result<Pizza, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, price = ?, description = ?, category = ?, image_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&pizza.name)
        .bind(pizza.price)
        .bind(&pizza.description)
        .bind(&pizza.category)
        .bind(&pizza.image_url)
        .bind(pizza.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update pizza", DUPLICATE_NAME))?;

        // Zero affected rows is also what MySQL reports for an unchanged row
        if result.rows_affected() == 0 && self.find_by_id(pizza.id).await?.is_none() {
            return Err(DomainError::not_found("Pizza"));
        }
        Ok(pizza.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete pizza", DUPLICATE_NAME))?;

        Ok(result.rows_affected() > 0)
    }
}
