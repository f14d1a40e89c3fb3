//! # REST API for Example Records
//!
//! Endpoints for listing, reading, searching, creating, updating and deleting
//! examples, plus the health check that lives under the same prefix.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{CreateExampleRequest, Example, SearchExampleRequest, SearchExampleResponse, UpdateExampleRequest};
use tracing::info;

use crate::io::rest::error::ApiError;
use crate::io::rest::health_apis;
use crate::io::rest::mappers::ExampleMapper;
use crate::AppState;

/// Create a router for example related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_examples).post(create_example))
        .route("/health", get(health_apis::health_check))
        .route("/search", post(search_examples))
        .route("/:id", get(get_example).put(update_example).delete(delete_example))
}

/// Get all examples
pub async fn list_examples(State(state): State<AppState>) -> Result<Json<Vec<Example>>, ApiError> {
    info!("GET /examples");
    let examples = state.example_service.list_examples().await?;
    Ok(Json(ExampleMapper::to_dto_list(examples)))
}

/// Get example by ID. An unknown ID answers `200` with a `null` body.
pub async fn get_example(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Example>>, ApiError> {
    info!("GET /examples/{}", id);
    let example = state.example_service.get_example(&id).await?;
    Ok(Json(example.map(ExampleMapper::to_dto)))
}

/// Search examples with pagination
pub async fn search_examples(
    State(state): State<AppState>,
    Json(request): Json<SearchExampleRequest>,
) -> Result<Json<SearchExampleResponse>, ApiError> {
    info!("POST /examples/search - request: {:?}", request);

    if request.page.is_some_and(|page| page < 1) {
        return Err(ApiError::InvalidInput("page must not be less than 1".to_string()));
    }
    if request.limit.is_some_and(|limit| limit < 1) {
        return Err(ApiError::InvalidInput("limit must not be less than 1".to_string()));
    }

    let command = ExampleMapper::to_search_command(request);
    let result = state.example_service.search_examples(command).await?;
    Ok(Json(ExampleMapper::to_search_response(result)))
}

/// Create a new example
pub async fn create_example(
    State(state): State<AppState>,
    Json(request): Json<CreateExampleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /examples - request: {:?}", request);
    let command = ExampleMapper::to_create_command(request);
    let example = state.example_service.create_example(command).await?;
    Ok((StatusCode::CREATED, Json(ExampleMapper::to_dto(example))))
}

/// Merge the provided fields into an existing example
pub async fn update_example(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateExampleRequest>,
) -> Result<Json<Example>, ApiError> {
    info!("PUT /examples/{} - request: {:?}", id, request);
    let command = ExampleMapper::to_update_command(id.clone(), request);
    match state.example_service.update_example(command).await? {
        Some(example) => Ok(Json(ExampleMapper::to_dto(example))),
        None => Err(ApiError::NotFound(id)),
    }
}

pub async fn delete_example(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("DELETE /examples/{}", id);
    if state.example_service.delete_example(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}
