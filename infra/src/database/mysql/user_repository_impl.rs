//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use pd_core::domain::entities::user::{Role, User};
use pd_core::errors::DomainError;
use pd_core::repositories::UserRepository;

use super::{column_error, map_sqlx_error};

const USER_COLUMNS: &str = "id, email, hashed_password, role, is_active, is_verified, created_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let role: String = row.try_get("role").map_err(|e| column_error("role", e))?;

        Ok(User {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            password_hash: row
                .try_get("hashed_password")
                .map_err(|e| column_error("hashed_password", e))?,
            role: role.parse::<Role>().map_err(|_| {
                DomainError::internal(format!("Unknown role stored for user: {}", role))
            })?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| column_error("is_active", e))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| column_error("is_verified", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find user", "User already exists"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find user", "User already exists"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                email, hashed_password, role, is_active, is_verified, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.is_verified)
            .bind(user.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to create user", "Email already registered"))?;

        Ok(User {
            id: result.last_insert_id() as i64,
            ..user
        })
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET hashed_password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to update password", "User already exists"))?;

        // MySQL reports zero affected rows when the value is unchanged
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to count users", "User already exists"))?;

        let count: i64 = row.try_get("count").map_err(|e| column_error("count", e))?;
        Ok(count as u64)
    }
}
