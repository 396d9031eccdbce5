//! Recipe domain - Recipe entity, validation and repository contract

mod entity;
mod repository;
mod validation;

pub use entity::{Recipe, RecipeDraft, RecipeId, RecipePatch};
pub use repository::RecipeRepository;
pub use validation::{
    validate_recipe_draft, validate_recipe_id, validate_recipe_patch, RecipeValidationError,
    MAX_RECIPE_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::mock;
