//! Infrastructure services

mod recipe_service;

pub use recipe_service::{RecipeCacheConfig, RecipeService, DEFAULT_LISTING_KEY};
