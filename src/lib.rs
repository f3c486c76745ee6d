pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use domain::model::{Farmer, NewFarmer, NewProduct, PatchError, Product, ProductPatch};
pub use storage::{FarmStore, PgFarmStore};
