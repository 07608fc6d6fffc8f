//! PostgreSQL product repository
//!
//! Stores one row per product: key + JSONB document + timestamps.

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::Row;

use crate::domain::product::{Product, ProductId, ProductRepository};
use crate::domain::DomainError;

const TABLE: &str = "products";

/// sqlx-backed implementation of ProductRepository
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensures the products table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                key VARCHAR(255) PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            TABLE
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }

    fn deserialize(row_data: serde_json::Value) -> Result<Product, DomainError> {
        serde_json::from_value(row_data)
            .map_err(|e| DomainError::storage(format!("Failed to deserialize product: {}", e)))
    }

    fn serialize(product: &Product) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(product)
            .map_err(|e| DomainError::storage(format!("Failed to serialize product: {}", e)))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let query = format!("SELECT data FROM {} WHERE key = $1", TABLE);

        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to fetch product: {}", e)))?;

        match row {
            Some(row) => {
                let data: serde_json::Value = row.get("data");
                Ok(Some(Self::deserialize(data)?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let query = format!("SELECT data FROM {} ORDER BY key", TABLE);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list products: {}", e)))?;

        rows.into_iter()
            .map(|row| {
                let data: serde_json::Value = row.get("data");
                Self::deserialize(data)
            })
            .collect()
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let data = Self::serialize(&product)?;
        let query = format!(
            "INSERT INTO {} (key, data) VALUES ($1, $2) ON CONFLICT (key) DO NOTHING",
            TABLE
        );

        let result = sqlx::query(&query)
            .bind(product.id().as_str())
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::conflict(format!(
                "Product '{}' already exists",
                product.id()
            )));
        }

        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let data = Self::serialize(&product)?;
        let query = format!(
            "UPDATE {} SET data = $2, updated_at = NOW() WHERE key = $1",
            TABLE
        );

        let result = sqlx::query(&query)
            .bind(product.id().as_str())
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Product '{}'",
                product.id()
            )));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, DomainError> {
        let query = format!("DELETE FROM {} WHERE key = $1", TABLE);

        let result = sqlx::query(&query)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete product: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
