//! Recipe service - CRUD with a cache-aside recipe listing
//!
//! Only the full listing is cached, under a single key. Reads of the listing
//! go through the cache; every successful mutation deletes the entry so the
//! next read rebuilds it from the store.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::cache::{Cache, CacheExt};
use crate::domain::recipe::{
    validate_recipe_draft, validate_recipe_patch, Recipe, RecipeDraft, RecipeId, RecipePatch,
    RecipeRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_cache_invalidation, record_cache_lookup};

/// Default cache key for the recipe listing
pub const DEFAULT_LISTING_KEY: &str = "recipes";

/// Configuration for the recipe listing cache
#[derive(Debug, Clone)]
pub struct RecipeCacheConfig {
    /// Key holding the serialized listing
    pub listing_key: String,
}

impl Default for RecipeCacheConfig {
    fn default() -> Self {
        Self {
            listing_key: DEFAULT_LISTING_KEY.to_string(),
        }
    }
}

impl RecipeCacheConfig {
    pub fn with_listing_key(mut self, key: impl Into<String>) -> Self {
        self.listing_key = key.into();
        self
    }
}

/// Recipe service holding shared store and cache handles
#[derive(Debug, Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeRepository>,
    cache: Arc<dyn Cache>,
    config: RecipeCacheConfig,
}

impl RecipeService {
    /// Create a new RecipeService with the default listing key
    pub fn new(store: Arc<dyn RecipeRepository>, cache: Arc<dyn Cache>) -> Self {
        Self::with_config(store, cache, RecipeCacheConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn RecipeRepository>,
        cache: Arc<dyn Cache>,
        config: RecipeCacheConfig,
    ) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    /// List all recipes, serving from the cache when the listing is present.
    ///
    /// A cache failure other than a miss is returned as is; the store is not
    /// queried in that case.
    pub async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        let key = self.config.listing_key.as_str();

        if let Some(recipes) = self.cache.get::<Vec<Recipe>>(key).await? {
            record_cache_lookup(true);
            debug!(count = recipes.len(), "Serving recipe listing from cache");
            return Ok(recipes);
        }

        record_cache_lookup(false);
        info!("Recipe listing cache miss, querying store");

        let recipes = self.store.find_all().await?;
        self.cache.set(key, &recipes, None).await?;

        Ok(recipes)
    }

    /// Create a recipe with a fresh id and publication time
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe, DomainError> {
        validate_recipe_draft(&draft)?;

        let recipe = Recipe::publish(draft);

        self.store.insert(recipe.clone()).await?;
        info!(recipe_id = %recipe.id(), "Recipe created");

        self.invalidate_listing().await;
        Ok(recipe)
    }

    /// Get a recipe by ID straight from the store
    pub async fn get(&self, id: &str) -> Result<Recipe, DomainError> {
        let recipe_id = Self::parse_recipe_id(id)?;

        self.store
            .find_by_id(&recipe_id)
            .await?
            .ok_or_else(|| Self::not_found(&recipe_id))
    }

    /// Replace the fields carried by `patch`
    pub async fn update(&self, id: &str, patch: RecipePatch) -> Result<(), DomainError> {
        let recipe_id = Self::parse_recipe_id(id)?;
        validate_recipe_patch(&patch)?;

        let matched = self.store.update_by_id(&recipe_id, &patch).await?;

        if matched == 0 {
            return Err(Self::not_found(&recipe_id));
        }

        info!(recipe_id = %recipe_id, "Recipe updated");
        self.invalidate_listing().await;
        Ok(())
    }

    /// Delete a recipe by ID
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let recipe_id = Self::parse_recipe_id(id)?;

        let matched = self.store.delete_by_id(&recipe_id).await?;

        if matched == 0 {
            return Err(Self::not_found(&recipe_id));
        }

        info!(recipe_id = %recipe_id, "Recipe deleted");
        self.invalidate_listing().await;
        Ok(())
    }

    /// Recipes carrying `tag` (case-insensitive), built on the cached listing
    pub async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, DomainError> {
        let matches: Vec<Recipe> = self
            .list()
            .await?
            .into_iter()
            .filter(|recipe| recipe.has_tag(tag))
            .collect();

        if matches.is_empty() {
            return Err(DomainError::not_found(format!(
                "No recipe matched tag '{}'",
                tag
            )));
        }

        Ok(matches)
    }

    /// Checks the store answers a point lookup
    pub async fn ping_store(&self) -> Result<(), DomainError> {
        self.store.find_by_id(&RecipeId::generate()).await?;
        Ok(())
    }

    /// Checks the cache is reachable
    pub async fn ping_cache(&self) -> Result<(), DomainError> {
        self.cache.ping().await
    }

    // The mutation already succeeded, so a failed delete only leaves a stale
    // listing until the next successful invalidation.
    async fn invalidate_listing(&self) {
        let key = self.config.listing_key.as_str();

        match self.cache.delete(key).await {
            Ok(existed) => {
                record_cache_invalidation(true);
                debug!(key, existed, "Recipe listing invalidated");
            }
            Err(e) => {
                record_cache_invalidation(false);
                warn!(key, error = %e, "Failed to invalidate recipe listing");
            }
        }
    }

    fn parse_recipe_id(id: &str) -> Result<RecipeId, DomainError> {
        RecipeId::new(id).map_err(DomainError::from)
    }

    fn not_found(id: &RecipeId) -> DomainError {
        DomainError::not_found(format!("Recipe '{}' not found", id))
    }
}
