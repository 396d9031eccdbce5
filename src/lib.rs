//! Recipes API
//!
//! Recipe CRUD over a document store with a cache-aside recipe listing:
//! - In-memory or PostgreSQL (JSONB) recipe storage
//! - In-memory (moka) or Redis listing cache, invalidated on every write
//! - Axum HTTP surface with health probes and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::cache::CacheFactory;
use infrastructure::services::RecipeService;
use infrastructure::storage::StorageFactory;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage.to_storage_config()?;
    info!(
        backend = ?storage_config.storage_type(),
        table = %config.storage.table,
        "Initializing recipe store"
    );

    let store = StorageFactory::create(&storage_config, &config.storage.table, Vec::new()).await?;

    let cache_config = config.cache.to_cache_config()?;
    info!(
        backend = %cache_config.cache_type(),
        listing_key = %config.cache.listing_key,
        "Initializing recipe cache"
    );

    let cache = CacheFactory::create(&cache_config).await?;

    let recipe_service =
        RecipeService::with_config(store, cache, config.cache.to_recipe_cache_config());

    Ok(AppState::new(Arc::new(recipe_service)))
}
