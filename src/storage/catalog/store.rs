//! Storage access contract for farmers and products.

use crate::domain::model::{Farmer, NewFarmer, NewProduct, Product, ProductPatch};
use async_trait::async_trait;

/// Single-row operations against the backing store.
///
/// Every write commits before returning. Lookups by id report absence through
/// `Option`/`bool`; `Err` is reserved for failures of the store itself.
#[async_trait]
pub trait FarmStore: Send + Sync {
    async fn create_farmer(&self, farmer: NewFarmer) -> anyhow::Result<Farmer>;

    /// All farmers, in whatever order the store returns them.
    async fn list_farmers(&self) -> anyhow::Result<Vec<Farmer>>;

    /// Inserts a product; `updated_at` is set to the creation time.
    async fn create_product(&self, product: NewProduct) -> anyhow::Result<Product>;

    async fn list_products(&self) -> anyhow::Result<Vec<Product>>;

    async fn get_product(&self, id: i32) -> anyhow::Result<Option<Product>>;

    /// Applies `patch` and refreshes `updated_at`. Returns `None` if no
    /// product has this id.
    async fn update_product(
        &self,
        id: i32,
        patch: &ProductPatch,
    ) -> anyhow::Result<Option<Product>>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_product(&self, id: i32) -> anyhow::Result<bool>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> anyhow::Result<()>;
}
