//! PostgreSQL recipe store with connection pooling

use std::fmt::Debug;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::domain::recipe::{Recipe, RecipeId, RecipePatch, RecipeRepository};
use crate::domain::DomainError;

/// PostgreSQL storage configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/recipes".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

/// Recipe store backed by a PostgreSQL JSONB document table
///
/// Each recipe is one row of (key, data). Field updates merge the patch into
/// the stored document, so untouched fields and `publishedAt` are preserved.
pub struct PostgresRecipeRepository {
    pool: PgPool,
    table_name: String,
}

impl Debug for PostgresRecipeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresRecipeRepository")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl PostgresRecipeRepository {
    /// Creates a store over an existing pool
    pub fn new(pool: PgPool, table_name: impl Into<String>) -> Self {
        Self {
            pool,
            table_name: table_name.into(),
        }
    }

    /// Creates a store with its own connection pool
    pub async fn connect(
        config: &PostgresConfig,
        table_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(std::time::Duration::from_secs(config.idle_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool, table_name))
    }

    /// Ensures the document table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                key VARCHAR(64) PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table_name
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }

    fn decode(data: serde_json::Value) -> Result<Recipe, DomainError> {
        serde_json::from_value(data)
            .map_err(|e| DomainError::storage(format!("Failed to deserialize recipe: {}", e)))
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn insert(&self, recipe: Recipe) -> Result<(), DomainError> {
        let data = serde_json::to_value(&recipe)
            .map_err(|e| DomainError::storage(format!("Failed to serialize recipe: {}", e)))?;

        let query = format!(
            "INSERT INTO {} (key, data) VALUES ($1, $2)",
            self.table_name
        );

        sqlx::query(&query)
            .bind(recipe.id().as_str())
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert recipe: {}", e)))?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
        let query = format!(
            "SELECT data FROM {} ORDER BY created_at, key",
            self.table_name
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list recipes: {}", e)))?;

        rows.into_iter()
            .map(|row| Self::decode(row.get("data")))
            .collect()
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError> {
        let query = format!("SELECT data FROM {} WHERE key = $1", self.table_name);

        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get recipe: {}", e)))?;

        row.map(|row| Self::decode(row.get("data"))).transpose()
    }

    async fn update_by_id(&self, id: &RecipeId, patch: &RecipePatch) -> Result<u64, DomainError> {
        let fields = serde_json::to_value(patch)
            .map_err(|e| DomainError::storage(format!("Failed to serialize patch: {}", e)))?;

        let query = format!(
            r#"
            UPDATE {}
            SET data = data || $2, updated_at = NOW()
            WHERE key = $1
            "#,
            self.table_name
        );

        let result = sqlx::query(&query)
            .bind(id.as_str())
            .bind(&fields)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update recipe: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, DomainError> {
        let query = format!("DELETE FROM {} WHERE key = $1", self.table_name);

        let result = sqlx::query(&query)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete recipe: {}", e)))?;

        Ok(result.rows_affected())
    }
}
