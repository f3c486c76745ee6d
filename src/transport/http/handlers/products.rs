use crate::domain::model::{NewProduct, Product, ProductPatch};
use crate::transport::http::types::{
    internal_error, json_422, not_found, path_422, ApiResponse, AppState, ProductChanges,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, error, info, warn};

const PRODUCT: &str = "Product";

/// Ids are stored as INTEGER; anything outside that range matches no row.
fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<NewProduct>, JsonRejection>,
) -> impl IntoResponse {
    let Json(product) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                "{\"name\": string, \"category\": string, \"price\": number, \"quantity\": integer, \"farmer_id\"?: integer, \"image_url\"?: string}",
            )
            .into_response();
        }
    };

    match state.store.create_product(product).await {
        Ok(created) => {
            info!(product_id = created.id, "product created");
            (StatusCode::OK, Json(created)).into_response()
        }
        Err(e) => {
            error!("create product failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_products().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => {
            error!("list products failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 422, description = "Invalid product id", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_422(e).into_response(),
    };
    let Some(id) = row_id(id) else {
        return not_found(PRODUCT).into_response();
    };

    match state.store.get_product(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => {
            warn!(product_id = id, "product not found");
            not_found(PRODUCT).into_response()
        }
        Err(e) => {
            error!(product_id = id, "get product failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductChanges,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 422, description = "Invalid product id or field value", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<ProductChanges>, JsonRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_422(e).into_response(),
    };
    let Some(id) = row_id(id) else {
        return not_found(PRODUCT).into_response();
    };
    let Json(ProductChanges(fields)) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "a JSON object of product fields").into_response(),
    };

    let patch = match ProductPatch::from_fields(&fields) {
        Ok(p) => p,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::failure(format!("Invalid field value: {}", e))),
            )
                .into_response();
        }
    };
    if patch.is_empty() {
        debug!(product_id = id, "update carries no recognized fields");
    }

    match state.store.update_product(id, &patch).await {
        Ok(Some(product)) => {
            info!(product_id = id, "product updated");
            (StatusCode::OK, Json(product)).into_response()
        }
        Ok(None) => {
            warn!(product_id = id, "product not found");
            not_found(PRODUCT).into_response()
        }
        Err(e) => {
            error!(product_id = id, "update product failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 422, description = "Invalid product id", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(v) => v,
        Err(e) => return path_422(e).into_response(),
    };
    let Some(id) = row_id(id) else {
        return not_found(PRODUCT).into_response();
    };

    match state.store.delete_product(id).await {
        Ok(true) => {
            info!(product_id = id, "product deleted");
            (StatusCode::OK, Json(ApiResponse::ok())).into_response()
        }
        Ok(false) => {
            warn!(product_id = id, "product not found");
            not_found(PRODUCT).into_response()
        }
        Err(e) => {
            error!(product_id = id, "delete product failed: {:#}", e);
            internal_error(&e).into_response()
        }
    }
}
