use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use common::types::Saved;
use models::customer::Customer;
use serde_json::Value;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

const SAVED: &str = "Customer saved successfully!";
const SAVE_FAILED: &str = "Error saving customer";
const FETCH_FAILED: &str = "Error fetching customers";

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerInput,
    responses(
        (status = 201, description = "Customer saved", body = crate::openapi::SavedCustomer),
        (status = 400, description = "Malformed body or schema violation", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Saved<Customer>>), ApiError> {
    let Json(payload) = payload.map_err(|r| ApiError::from_rejection(SAVE_FAILED, r))?;
    let saved = state
        .customers
        .create(&payload)
        .await
        .map_err(|e| ApiError::from_service(SAVE_FAILED, e))?;
    Ok((StatusCode::CREATED, Json(Saved { message: SAVED, data: saved })))
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses(
        (status = 200, description = "Every stored customer", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let all = state
        .customers
        .list_all()
        .await
        .map_err(|e| ApiError::from_service(FETCH_FAILED, e))?;
    info!(count = all.len(), "list customers");
    Ok(Json(all))
}
