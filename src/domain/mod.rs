//! Domain layer - Core entities and contracts

pub mod cache;
pub mod error;
pub mod recipe;

pub use cache::{Cache, CacheExt};
pub use error::DomainError;
pub use recipe::{
    validate_recipe_draft, validate_recipe_id, validate_recipe_patch, Recipe, RecipeDraft,
    RecipeId, RecipePatch, RecipeRepository, RecipeValidationError,
};
