pub mod catalog;

pub use catalog::{FarmStore, PgFarmStore};
