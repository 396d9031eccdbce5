//! Storage factory for runtime storage selection

use std::sync::Arc;

use crate::domain::recipe::{Recipe, RecipeRepository};
use crate::domain::DomainError;

use super::in_memory::InMemoryRecipeRepository;
use super::postgres::{PostgresConfig, PostgresRecipeRepository};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage type: {}. Valid types: memory, postgres",
                s
            ))),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Factory for creating recipe stores
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a recipe store based on the configuration
    ///
    /// `seed` only applies to the in-memory backend.
    pub async fn create(
        config: &StorageConfig,
        table_name: &str,
        seed: Vec<Recipe>,
    ) -> Result<Arc<dyn RecipeRepository>, DomainError> {
        match config {
            StorageConfig::InMemory => Ok(Arc::new(InMemoryRecipeRepository::with_recipes(seed))),
            StorageConfig::Postgres(pg_config) => {
                let store = PostgresRecipeRepository::connect(pg_config, table_name).await?;
                store.ensure_table().await?;
                Ok(Arc::new(store))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::RecipeDraft;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!("memory".parse::<StorageType>().unwrap(), StorageType::InMemory);
        assert_eq!("in-memory".parse::<StorageType>().unwrap(), StorageType::InMemory);
        assert_eq!("postgres".parse::<StorageType>().unwrap(), StorageType::Postgres);
        assert_eq!("PG".parse::<StorageType>().unwrap(), StorageType::Postgres);
        assert!("mongo".parse::<StorageType>().is_err());
    }

    #[test]
    fn test_storage_config_types() {
        assert_eq!(StorageConfig::in_memory().storage_type(), StorageType::InMemory);
        assert_eq!(
            StorageConfig::postgres_url("postgres://localhost/test").storage_type(),
            StorageType::Postgres
        );
    }

    #[tokio::test]
    async fn test_create_in_memory_with_seed() {
        let seed = vec![Recipe::publish(RecipeDraft::new("Soup"))];
        let store = StorageFactory::create(&StorageConfig::in_memory(), "recipes", seed)
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), "Soup");
    }
}
