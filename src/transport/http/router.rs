use crate::domain::model::{Farmer, NewFarmer, NewProduct, Product};
use crate::transport::http::handlers::{farmers, health, products};
use crate::transport::http::types::{ApiResponse, AppState, ProductChanges};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Farm2Home API"),
    paths(
        health::healthcheck_handler,
        farmers::create_farmer_handler,
        farmers::list_farmers_handler,
        products::create_product_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        ApiResponse,
        Farmer,
        NewFarmer,
        Product,
        NewProduct,
        ProductChanges
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/farmers",
            get(farmers::list_farmers_handler).post(farmers::create_farmer_handler),
        )
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}

/// Any origin, method and header, with credentials. Origins are mirrored back
/// because a wildcard origin cannot be combined with credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Routes plus Swagger UI, CORS and request tracing.
pub fn create_app(app_state: AppState) -> Router {
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
