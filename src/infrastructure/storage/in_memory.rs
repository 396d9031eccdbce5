//! In-memory recipe store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::recipe::{Recipe, RecipeId, RecipePatch, RecipeRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory recipe store
///
/// Keeps insertion order. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with recipes
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    fn read_lock_error(e: impl std::fmt::Display) -> DomainError {
        DomainError::storage(format!("Failed to acquire read lock: {}", e))
    }

    fn write_lock_error(e: impl std::fmt::Display) -> DomainError {
        DomainError::storage(format!("Failed to acquire write lock: {}", e))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn insert(&self, recipe: Recipe) -> Result<(), DomainError> {
        let mut recipes = self.recipes.write().map_err(Self::write_lock_error)?;

        if recipes.iter().any(|r| r.id() == recipe.id()) {
            return Err(DomainError::storage(format!(
                "Recipe with id '{}' already exists",
                recipe.id()
            )));
        }

        recipes.push(recipe);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
        let recipes = self.recipes.read().map_err(Self::read_lock_error)?;
        Ok(recipes.clone())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError> {
        let recipes = self.recipes.read().map_err(Self::read_lock_error)?;
        Ok(recipes.iter().find(|r| r.id() == id).cloned())
    }

    async fn update_by_id(&self, id: &RecipeId, patch: &RecipePatch) -> Result<u64, DomainError> {
        let mut recipes = self.recipes.write().map_err(Self::write_lock_error)?;

        match recipes.iter_mut().find(|r| r.id() == id) {
            Some(recipe) => {
                recipe.apply(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, DomainError> {
        let mut recipes = self.recipes.write().map_err(Self::write_lock_error)?;
        let before = recipes.len();

        recipes.retain(|r| r.id() != id);
        Ok((before - recipes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::RecipeDraft;

    fn recipe(name: &str) -> Recipe {
        Recipe::publish(RecipeDraft::new(name).with_tags(vec!["dinner".to_string()]))
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let store = InMemoryRecipeRepository::new();
        let soup = recipe("Soup");

        store.insert(soup.clone()).await.unwrap();

        let found = store.find_by_id(soup.id()).await.unwrap();
        assert_eq!(found, Some(soup));
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_fails() {
        let store = InMemoryRecipeRepository::new();
        let soup = recipe("Soup");

        store.insert(soup.clone()).await.unwrap();
        let result = store.insert(soup).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryRecipeRepository::new();
        let names = ["Soup", "Salad", "Stew"];

        for name in names {
            store.insert(recipe(name)).await.unwrap();
        }

        let all = store.find_all().await.unwrap();
        let listed: Vec<&str> = all.iter().map(|r| r.name()).collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let store = InMemoryRecipeRepository::with_recipes(vec![recipe("Soup")]);

        let found = store.find_by_id(&RecipeId::generate()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_by_id_reports_match_count() {
        let soup = recipe("Soup");
        let store = InMemoryRecipeRepository::with_recipes(vec![soup.clone()]);
        let patch = RecipePatch::default().with_name("Broth");

        assert_eq!(store.update_by_id(soup.id(), &patch).await.unwrap(), 1);
        assert_eq!(store.update_by_id(&RecipeId::generate(), &patch).await.unwrap(), 0);

        let updated = store.find_by_id(soup.id()).await.unwrap().unwrap();
        assert_eq!(updated.name(), "Broth");
        assert_eq!(updated.tags(), ["dinner"]);
        assert_eq!(updated.published_at(), soup.published_at());
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_match_count() {
        let soup = recipe("Soup");
        let store = InMemoryRecipeRepository::with_recipes(vec![soup.clone(), recipe("Salad")]);

        assert_eq!(store.delete_by_id(soup.id()).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(soup.id()).await.unwrap(), 0);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
