pub mod postgres;
pub mod store;

pub use postgres::PgFarmStore;
pub use store::FarmStore;
