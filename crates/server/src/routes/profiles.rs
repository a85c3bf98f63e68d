use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use common::types::Saved;
use models::profile::Profile;
use serde_json::Value;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

const SAVED: &str = "Profile saved successfully!";
const SAVE_FAILED: &str = "Error saving profile";
const FETCH_FAILED: &str = "Error fetching profiles";

#[utoipa::path(
    post, path = "/api/profiles", tag = "profiles",
    request_body = crate::openapi::ProfileInput,
    responses(
        (status = 201, description = "Profile saved", body = crate::openapi::SavedProfile),
        (status = 400, description = "Malformed body or schema violation", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Saved<Profile>>), ApiError> {
    let Json(payload) = payload.map_err(|r| ApiError::from_rejection(SAVE_FAILED, r))?;
    let saved = state
        .profiles
        .create(&payload)
        .await
        .map_err(|e| ApiError::from_service(SAVE_FAILED, e))?;
    Ok((StatusCode::CREATED, Json(Saved { message: SAVED, data: saved })))
}

#[utoipa::path(
    get, path = "/api/profiles", tag = "profiles",
    responses(
        (status = 200, description = "Every stored profile", body = [crate::openapi::ProfileDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, ApiError> {
    let all = state
        .profiles
        .list_all()
        .await
        .map_err(|e| ApiError::from_service(FETCH_FAILED, e))?;
    info!(count = all.len(), "list profiles");
    Ok(Json(all))
}
