//! Recipe entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_recipe_id, RecipeValidationError};

/// Recipe identifier - a hyphenated lowercase UUID assigned at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(String);

impl RecipeId {
    /// Parse a caller-supplied identifier into its canonical form
    pub fn new(id: impl Into<String>) -> Result<Self, RecipeValidationError> {
        let id: String = id.into();
        let uuid = validate_recipe_id(&id)?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Generate a fresh, globally unique identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecipeId {
    type Error = RecipeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied recipe content, without identity or timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }
}

/// Field-level replacement applied by an update.
///
/// Identifier and publication timestamp are immutable, so they have no slot here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
}

impl RecipePatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = Some(instructions);
        self
    }

    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tags.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
    }
}

/// Recipe document as persisted in the store and cached in the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    id: RecipeId,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    published_at: DateTime<Utc>,
}

impl Recipe {
    /// Build a recipe from a draft, stamping identity and publication time
    pub fn new(id: RecipeId, draft: RecipeDraft, published_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            tags: draft.tags,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            published_at,
        }
    }

    /// Build a brand new recipe with a generated id and the current time
    pub fn publish(draft: RecipeDraft) -> Self {
        Self::new(RecipeId::generate(), draft, Utc::now())
    }

    // Getters

    pub fn id(&self) -> &RecipeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Replace the fields carried by the patch
    pub fn apply(&mut self, patch: &RecipePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }

        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }

        if let Some(ingredients) = &patch.ingredients {
            self.ingredients = ingredients.clone();
        }

        if let Some(instructions) = &patch.instructions {
            self.instructions = instructions.clone();
        }
    }

    /// The draft this recipe would have been created from
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            tags: self.tags.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}
