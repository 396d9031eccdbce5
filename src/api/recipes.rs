//! Recipe endpoints

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::recipe::{Recipe, RecipeDraft, RecipePatch};

/// Request to create a recipe
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeApiRequest {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl From<CreateRecipeApiRequest> for RecipeDraft {
    fn from(request: CreateRecipeApiRequest) -> Self {
        RecipeDraft::new(request.name)
            .with_tags(request.tags)
            .with_ingredients(request.ingredients)
            .with_instructions(request.instructions)
    }
}

/// Request to update a recipe; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecipeApiRequest {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

impl From<UpdateRecipeApiRequest> for RecipePatch {
    fn from(request: UpdateRecipeApiRequest) -> Self {
        RecipePatch {
            name: request.name,
            tags: request.tags,
            ingredients: request.ingredients,
            instructions: request.instructions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub tag: Option<String>,
}

/// Confirmation body for update and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the recipes router
pub fn create_recipes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/search", get(search_recipes))
        .route(
            "/{recipe_id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

/// GET /recipes
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    debug!("Listing recipes");

    let recipes = state.recipe_service.list().await?;
    Ok(Json(recipes))
}

/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeApiRequest>,
) -> Result<Json<Recipe>, ApiError> {
    debug!(name = %request.name, "Creating recipe");

    let recipe = state
        .recipe_service
        .create(RecipeDraft::from(request))
        .await?;
    Ok(Json(recipe))
}

/// GET /recipes/search?tag=
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let tag = query
        .tag
        .filter(|tag| !tag.trim().is_empty())
        .ok_or_else(|| {
            ApiError::bad_request("Query parameter 'tag' is required").with_param("tag")
        })?;

    debug!(tag = %tag, "Searching recipes by tag");

    let recipes = state.recipe_service.search_by_tag(&tag).await?;
    Ok(Json(recipes))
}

/// GET /recipes/{recipe_id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    debug!(recipe_id = %recipe_id, "Getting recipe");

    let recipe = state.recipe_service.get(&recipe_id).await?;
    Ok(Json(recipe))
}

/// PUT /recipes/{recipe_id}
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    Json(request): Json<UpdateRecipeApiRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(recipe_id = %recipe_id, "Updating recipe");

    state
        .recipe_service
        .update(&recipe_id, RecipePatch::from(request))
        .await?;
    Ok(Json(MessageResponse::new("Recipe has been updated")))
}

/// DELETE /recipes/{recipe_id}
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(recipe_id = %recipe_id, "Deleting recipe");

    state.recipe_service.delete(&recipe_id).await?;
    Ok(Json(MessageResponse::new("Recipe has been deleted")))
}
