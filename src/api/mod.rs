use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::put;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{DeadlineRequest, EnrichedDeadline};
use crate::services::DeadlineService;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(list_deadlines).post(create_deadline))
        .route("/{id}", put(update_deadline).delete(delete_deadline))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.ping().await?;
    Ok(StatusCode::OK)
}

async fn list_deadlines(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedDeadline>>, AppError> {
    let deadlines = DeadlineService::from_state(&state).list().await?;
    Ok(Json(deadlines))
}

async fn create_deadline(
    State(state): State<AppState>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let deadline = DeadlineService::from_state(&state).create(req).await?;
    Ok((StatusCode::CREATED, Json(deadline)))
}

async fn update_deadline(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Result<Json<EnrichedDeadline>, AppError> {
    let Json(req) = payload?;
    let deadline = DeadlineService::from_state(&state).update(&id, req).await?;
    Ok(Json(deadline))
}

async fn delete_deadline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    DeadlineService::from_state(&state).delete(&id).await?;
    Ok(Json(json!({ "message": "Successfully deleted" })))
}
