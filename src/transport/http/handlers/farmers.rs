use crate::domain::model::{Farmer, NewFarmer};
use crate::transport::http::types::{internal_error, json_422, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

#[utoipa::path(
    post,
    path = "/farmers",
    request_body = NewFarmer,
    responses(
        (status = 200, description = "Farmer created", body = Farmer),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_farmer_handler(
    State(state): State<AppState>,
    request: Result<Json<NewFarmer>, JsonRejection>,
) -> impl IntoResponse {
    let Json(farmer) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": string, \"phone\"?: string}").into_response(),
    };

    match state.store.create_farmer(farmer).await {
        Ok(created) => {
            info!(farmer_id = created.id, "farmer created");
            (StatusCode::OK, Json(created)).into_response()
        }
        Err(e) => {
            error!("create farmer failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/farmers",
    responses(
        (status = 200, description = "All farmers", body = [Farmer]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_farmers_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_farmers().await {
        Ok(farmers) => (StatusCode::OK, Json(farmers)).into_response(),
        Err(e) => {
            error!("list farmers failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}
