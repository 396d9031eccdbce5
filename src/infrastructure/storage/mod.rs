//! Storage infrastructure - Recipe store implementations

mod factory;
mod in_memory;
mod postgres;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryRecipeRepository;
pub use postgres::{PostgresConfig, PostgresRecipeRepository};
