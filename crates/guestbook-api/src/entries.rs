use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use guestbook_types::api::{CreateEntryRequest, DeleteResponse, UpdateEntryRequest};

use crate::AppState;
use crate::error::ApiError;

/// GET /guestbook — every entry, newest first.
pub async fn list_entries(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = state.store.list_entries().await?;
    Ok(Json(entries))
}

/// POST /guestbook — presence of `name` and `message` is checked here,
/// before the store is contacted; every deeper constraint belongs to the
/// store.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !req.has_required_fields() {
        return Err(ApiError::MissingField);
    }
    let created = state.store.insert_entry(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /guestbook/{id} — partial update, no existence check. An id with no
/// row behind it answers 200 with an empty array, same as the store reports
/// it.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state.store.update_entry(id, &req).await?;
    Ok(Json(updated))
}

/// DELETE /guestbook/{id} — confirms whether or not a row existed.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_entry(id).await?;
    Ok(Json(DeleteResponse {
        message: format!("Entry {id} deleted successfully"),
    }))
}
