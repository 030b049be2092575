pub mod generate;
pub mod ping;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the router for all API endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-recipe", post(generate::generate_recipe))
        .route("/api/ping", get(ping::ping))
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::generate_recipe, ping::ping),
    components(schemas(
        ErrorResponse,
        generate::GenerateRecipeRequest,
        generate::RecipeResponse,
        ping::PingResponse,
    ))
)]
struct ApiDoc;

/// Generate the complete OpenAPI spec
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
