//! Recipe validation utilities

use thiserror::Error;
use uuid::Uuid;

use super::{RecipeDraft, RecipePatch};
use crate::domain::DomainError;

/// Maximum length for recipe names
pub const MAX_RECIPE_NAME_LENGTH: usize = 200;

/// Recipe validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeValidationError {
    #[error("Invalid recipe ID '{id}': must be a UUID")]
    InvalidId { id: String },

    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Recipe name too long: {length} characters (max {max})")]
    NameTooLong { length: usize, max: usize },

    #[error("Recipe {field} cannot contain blank entries")]
    BlankEntry { field: &'static str },

    #[error("Update must set at least one of name, tags, ingredients or instructions")]
    EmptyPatch,
}

impl From<RecipeValidationError> for DomainError {
    fn from(error: RecipeValidationError) -> Self {
        match error {
            RecipeValidationError::InvalidId { .. } => DomainError::invalid_id(error.to_string()),
            other => DomainError::validation(other.to_string()),
        }
    }
}

/// Validates a recipe identifier, returning the parsed UUID.
///
/// Any textual form `uuid` understands is accepted (hyphenated, simple,
/// braced, urn).
pub fn validate_recipe_id(id: &str) -> Result<Uuid, RecipeValidationError> {
    Uuid::parse_str(id).map_err(|_| RecipeValidationError::InvalidId { id: id.to_string() })
}

/// Validates a draft before it is handed to the service
pub fn validate_recipe_draft(draft: &RecipeDraft) -> Result<(), RecipeValidationError> {
    validate_name(&draft.name)?;
    validate_entries("tags", &draft.tags)?;
    validate_entries("ingredients", &draft.ingredients)?;
    validate_entries("instructions", &draft.instructions)
}

/// Validates a patch; only the fields it carries are checked
pub fn validate_recipe_patch(patch: &RecipePatch) -> Result<(), RecipeValidationError> {
    if patch.is_empty() {
        return Err(RecipeValidationError::EmptyPatch);
    }

    if let Some(name) = &patch.name {
        validate_name(name)?;
    }

    if let Some(tags) = &patch.tags {
        validate_entries("tags", tags)?;
    }

    if let Some(ingredients) = &patch.ingredients {
        validate_entries("ingredients", ingredients)?;
    }

    if let Some(instructions) = &patch.instructions {
        validate_entries("instructions", instructions)?;
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<(), RecipeValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(RecipeValidationError::EmptyName);
    }

    let length = trimmed.chars().count();

    if length > MAX_RECIPE_NAME_LENGTH {
        return Err(RecipeValidationError::NameTooLong {
            length,
            max: MAX_RECIPE_NAME_LENGTH,
        });
    }

    Ok(())
}

fn validate_entries(field: &'static str, entries: &[String]) -> Result<(), RecipeValidationError> {
    if entries.iter().any(|entry| entry.trim().is_empty()) {
        return Err(RecipeValidationError::BlankEntry { field });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            tags: vec!["main".to_string()],
            ingredients: vec!["water".to_string()],
            instructions: vec!["boil".to_string()],
        }
    }

    #[test]
    fn test_valid_recipe_id() {
        assert!(validate_recipe_id("6f1c2c1e-8a4f-4d5e-9b3a-1c2d3e4f5a6b").is_ok());
    }

    #[test]
    fn test_recipe_id_accepts_simple_and_braced_forms() {
        let expected = Uuid::parse_str("6f1c2c1e-8a4f-4d5e-9b3a-1c2d3e4f5a6b").unwrap();

        assert_eq!(
            validate_recipe_id("6f1c2c1e8a4f4d5e9b3a1c2d3e4f5a6b"),
            Ok(expected)
        );
        assert_eq!(
            validate_recipe_id("{6f1c2c1e-8a4f-4d5e-9b3a-1c2d3e4f5a6b}"),
            Ok(expected)
        );
    }

    #[test]
    fn test_invalid_recipe_id() {
        let result = validate_recipe_id("not-a-uuid");
        assert_eq!(
            result,
            Err(RecipeValidationError::InvalidId {
                id: "not-a-uuid".to_string()
            })
        );
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_recipe_draft(&draft("Soup")).is_ok());
    }

    #[test]
    fn test_draft_empty_name() {
        assert_eq!(
            validate_recipe_draft(&draft("   ")),
            Err(RecipeValidationError::EmptyName)
        );
    }

    #[test]
    fn test_draft_name_too_long() {
        let name = "a".repeat(MAX_RECIPE_NAME_LENGTH + 1);
        assert!(matches!(
            validate_recipe_draft(&draft(&name)),
            Err(RecipeValidationError::NameTooLong { .. })
        ));
    }

    #[test]
    fn test_draft_blank_ingredient() {
        let mut draft = draft("Soup");
        draft.ingredients.push("  ".to_string());

        assert_eq!(
            validate_recipe_draft(&draft),
            Err(RecipeValidationError::BlankEntry {
                field: "ingredients"
            })
        );
    }

    #[test]
    fn test_empty_patch_rejected() {
        assert_eq!(
            validate_recipe_patch(&RecipePatch::default()),
            Err(RecipeValidationError::EmptyPatch)
        );
    }

    #[test]
    fn test_patch_only_checks_present_fields() {
        let patch = RecipePatch::default().with_tags(vec!["quick".to_string()]);
        assert!(validate_recipe_patch(&patch).is_ok());

        let patch = RecipePatch::default().with_name("");
        assert_eq!(
            validate_recipe_patch(&patch),
            Err(RecipeValidationError::EmptyName)
        );
    }

    #[test]
    fn test_invalid_id_maps_to_domain_invalid_id() {
        let error: DomainError = RecipeValidationError::InvalidId {
            id: "x".to_string(),
        }
        .into();
        assert!(matches!(error, DomainError::InvalidId { .. }));

        let error: DomainError = RecipeValidationError::EmptyName.into();
        assert!(matches!(error, DomainError::Validation { .. }));
    }
}
