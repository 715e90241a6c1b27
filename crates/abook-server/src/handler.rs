use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use abook_types::{validate, AddressDraft, AddressId};

use crate::error::ApiError;
use crate::AppState;

/// Serialize a response payload, mapping encode failures to a server
/// fault rather than panicking inside the framework.
fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn parse_id(raw: &str) -> Result<AddressId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// `GET /api/address`
pub async fn list_addresses(State(state): State<AppState>) -> Result<Response, ApiError> {
    let entries = state.store.list();
    json_response(StatusCode::OK, &entries)
}

/// `POST /api/address`
pub async fn create_address(
    State(state): State<AppState>,
    body: Result<Json<AddressDraft>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(draft) = body?;
    validate(&draft)?;
    let entry = state.store.create(&draft);
    json_response(StatusCode::CREATED, &entry)
}

/// `GET /api/address/{id}`
pub async fn read_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let entry = state.store.find(id)?;
    json_response(StatusCode::OK, &entry)
}

/// `PUT /api/address/{id}`
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AddressDraft>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let Json(draft) = body?;
    validate(&draft)?;
    let entry = state.store.update(id, &draft)?;
    json_response(StatusCode::OK, &entry)
}

/// `DELETE /api/address/{id}`
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// `GET /api/address/export`
///
/// CSV export has no implementation yet; answers with a fixed
/// acknowledgment instead of a silent success.
pub async fn export_addresses() -> Response {
    (StatusCode::NOT_IMPLEMENTED, "csv export is not implemented\n").into_response()
}

/// Catch-all for paths no route matched.
pub async fn invalid_path() -> ApiError {
    ApiError::InvalidPath
}
