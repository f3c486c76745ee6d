use crate::storage::FarmStore;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FarmStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FarmStore>) -> Self {
        Self { store }
    }
}

/// Envelope for errors, health and delete responses. Entity reads and writes
/// return the bare entity instead.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Body of `PUT /products/{id}`: any JSON object. Keys naming a mutable
/// product field overwrite it; other keys are ignored.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ProductChanges(pub Map<String, JsonValue>);

pub type ErrorResponse = (StatusCode, Json<ApiResponse>);

pub fn json_422(err: JsonRejection, expected: &str) -> ErrorResponse {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::failure(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}

pub fn path_422(err: PathRejection) -> ErrorResponse {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::failure(format!("Invalid path parameter: {}", err))),
    )
}

pub fn not_found(what: &str) -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure(format!("{} not found", what))),
    )
}

pub fn internal_error(err: &anyhow::Error) -> ErrorResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(format!("Storage error: {}", err))),
    )
}
