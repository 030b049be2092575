use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pantry_core::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    /// Comma-separated ingredient list, e.g. "Egg, Milk".
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub title: String,
    pub description: String,
    pub ingredients_list: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            description: recipe.description,
            ingredients_list: recipe.ingredients_list,
            instructions: recipe.instructions,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/generate-recipe",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe (backup recipe when all models fail)", body = RecipeResponse),
        (status = 400, description = "Missing ingredients", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    let ingredients = request.ingredients.as_deref().map(str::trim).unwrap_or("");

    if ingredients.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No ingredients provided".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(ingredients = %ingredients, "new recipe request");

    let generated =
        pantry_core::generate::generate_recipe(state.ai.as_ref(), &state.generate, ingredients)
            .await;

    match &generated.model {
        Some(model) => tracing::info!(model = %model, "served model-generated recipe"),
        None => tracing::info!("served backup recipe"),
    }

    (
        StatusCode::OK,
        Json(RecipeResponse::from(generated.recipe)),
    )
        .into_response()
}
