//! Application state for shared services

use std::sync::Arc;

use crate::domain::recipe::{Recipe, RecipeDraft, RecipePatch};
use crate::domain::DomainError;
use crate::infrastructure::services::RecipeService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<dyn RecipeServiceTrait>,
}

impl AppState {
    pub fn new(recipe_service: Arc<dyn RecipeServiceTrait>) -> Self {
        Self { recipe_service }
    }
}

/// Trait for recipe service operations
#[async_trait::async_trait]
pub trait RecipeServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError>;
    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, DomainError>;
    async fn get(&self, id: &str) -> Result<Recipe, DomainError>;
    async fn update(&self, id: &str, patch: RecipePatch) -> Result<(), DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, DomainError>;
    async fn ping_store(&self) -> Result<(), DomainError>;
    async fn ping_cache(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl RecipeServiceTrait for RecipeService {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        RecipeService::list(self).await
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Recipe, DomainError> {
        RecipeService::create(self, draft).await
    }

    async fn get(&self, id: &str) -> Result<Recipe, DomainError> {
        RecipeService::get(self, id).await
    }

    async fn update(&self, id: &str, patch: RecipePatch) -> Result<(), DomainError> {
        RecipeService::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        RecipeService::delete(self, id).await
    }

    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, DomainError> {
        RecipeService::search_by_tag(self, tag).await
    }

    async fn ping_store(&self) -> Result<(), DomainError> {
        RecipeService::ping_store(self).await
    }

    async fn ping_cache(&self) -> Result<(), DomainError> {
        RecipeService::ping_cache(self).await
    }
}
