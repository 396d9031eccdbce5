//! Recipe repository trait

use async_trait::async_trait;

use super::{Recipe, RecipeId, RecipePatch};
use crate::domain::DomainError;

/// Document store contract for recipes
#[async_trait]
pub trait RecipeRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new recipe
    async fn insert(&self, recipe: Recipe) -> Result<(), DomainError>;

    /// All recipes in insertion order
    async fn find_all(&self) -> Result<Vec<Recipe>, DomainError>;

    /// Get a recipe by ID
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError>;

    /// Apply a patch to the matching recipe, returning the number of matched records
    async fn update_by_id(&self, id: &RecipeId, patch: &RecipePatch) -> Result<u64, DomainError>;

    /// Remove the matching recipe, returning the number of matched records
    async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock recipe repository recording how often each operation ran
    #[derive(Debug, Default)]
    pub struct MockRecipeRepository {
        recipes: Mutex<Vec<Recipe>>,
        error: Mutex<Option<String>>,
        find_all_calls: AtomicUsize,
        find_by_id_calls: AtomicUsize,
        insert_calls: AtomicUsize,
    }

    impl MockRecipeRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_recipe(self, recipe: Recipe) -> Self {
            self.recipes.lock().unwrap().push(recipe);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            self.set_error(error);
            self
        }

        pub fn set_error(&self, error: impl Into<String>) {
            *self.error.lock().unwrap() = Some(error.into());
        }

        pub fn find_all_calls(&self) -> usize {
            self.find_all_calls.load(Ordering::SeqCst)
        }

        pub fn find_by_id_calls(&self) -> usize {
            self.find_by_id_calls.load(Ordering::SeqCst)
        }

        pub fn insert_calls(&self) -> usize {
            self.insert_calls.load(Ordering::SeqCst)
        }

        pub fn len(&self) -> usize {
            self.recipes.lock().unwrap().len()
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::storage(error));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl RecipeRepository for MockRecipeRepository {
        async fn insert(&self, recipe: Recipe) -> Result<(), DomainError> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            self.recipes.lock().unwrap().push(recipe);
            Ok(())
        }

        async fn find_all(&self) -> Result<Vec<Recipe>, DomainError> {
            self.find_all_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            Ok(self.recipes.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, DomainError> {
            self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
            self.check_error()?;
            Ok(self
                .recipes
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id() == id)
                .cloned())
        }

        async fn update_by_id(
            &self,
            id: &RecipeId,
            patch: &RecipePatch,
        ) -> Result<u64, DomainError> {
            self.check_error()?;
            let mut recipes = self.recipes.lock().unwrap();

            match recipes.iter_mut().find(|r| r.id() == id) {
                Some(recipe) => {
                    recipe.apply(patch);
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete_by_id(&self, id: &RecipeId) -> Result<u64, DomainError> {
            self.check_error()?;
            let mut recipes = self.recipes.lock().unwrap();
            let before = recipes.len();
            recipes.retain(|r| r.id() != id);
            Ok((before - recipes.len()) as u64)
        }
    }
}
