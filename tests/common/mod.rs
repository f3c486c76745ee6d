// tests/common/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use farm2home_api::{transport, FarmStore, Farmer, NewFarmer, NewProduct, Product, ProductPatch};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-process `FarmStore` so the HTTP surface can be exercised without Postgres.
/// Does not check `farmer_id` references.
#[derive(Default)]
pub struct MemoryFarmStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    farmers: BTreeMap<i32, Farmer>,
    products: BTreeMap<i32, Product>,
    last_farmer_id: i32,
    last_product_id: i32,
}

#[async_trait]
impl FarmStore for MemoryFarmStore {
    async fn create_farmer(&self, farmer: NewFarmer) -> anyhow::Result<Farmer> {
        let mut t = self.inner.lock().unwrap();
        t.last_farmer_id += 1;
        let created = farmer.into_farmer(t.last_farmer_id);
        t.farmers.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_farmers(&self) -> anyhow::Result<Vec<Farmer>> {
        Ok(self.inner.lock().unwrap().farmers.values().cloned().collect())
    }

    async fn create_product(&self, product: NewProduct) -> anyhow::Result<Product> {
        let mut t = self.inner.lock().unwrap();
        t.last_product_id += 1;
        let created = product.into_product(t.last_product_id, Utc::now());
        t.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        Ok(self.inner.lock().unwrap().products.values().cloned().collect())
    }

    async fn get_product(&self, id: i32) -> anyhow::Result<Option<Product>> {
        Ok(self.inner.lock().unwrap().products.get(&id).cloned())
    }

    async fn update_product(
        &self,
        id: i32,
        patch: &ProductPatch,
    ) -> anyhow::Result<Option<Product>> {
        let mut t = self.inner.lock().unwrap();
        Ok(t.products.get_mut(&id).map(|product| {
            product.apply_patch(patch, Utc::now());
            product.clone()
        }))
    }

    async fn delete_product(&self, id: i32) -> anyhow::Result<bool> {
        Ok(self.inner.lock().unwrap().products.remove(&id).is_some())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A store whose every operation fails, standing in for a lost connection.
pub struct UnreachableStore;

#[async_trait]
impl FarmStore for UnreachableStore {
    async fn create_farmer(&self, _farmer: NewFarmer) -> anyhow::Result<Farmer> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn list_farmers(&self) -> anyhow::Result<Vec<Farmer>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn create_product(&self, _product: NewProduct) -> anyhow::Result<Product> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn get_product(&self, _id: i32) -> anyhow::Result<Option<Product>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn update_product(
        &self,
        _id: i32,
        _patch: &ProductPatch,
    ) -> anyhow::Result<Option<Product>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn delete_product(&self, _id: i32) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// Serves the full app on an ephemeral port and returns its base URL.
pub async fn spawn_server(store: Arc<dyn FarmStore>) -> String {
    let app = transport::http::create_app(transport::http::AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub async fn spawn_memory_server() -> String {
    spawn_server(Arc::new(MemoryFarmStore::default())).await
}
