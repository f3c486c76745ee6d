//! Domain model definitions for farmers and the products they list.

pub mod farmer;
pub mod patch;
pub mod product;

pub use farmer::{Farmer, NewFarmer};
pub use patch::{PatchError, ProductPatch};
pub use product::{NewProduct, Product};
