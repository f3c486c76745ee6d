pub mod router;
pub mod types;
pub mod handlers {
    pub mod farmers;
    pub mod health;
    pub mod products;
}

pub use router::{cors_layer, create_app, create_router, ApiDoc};
pub use types::AppState;
