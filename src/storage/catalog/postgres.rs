//! `FarmStore` implementation on a PostgreSQL connection pool.

use super::store::FarmStore;
use crate::domain::model::{Farmer, NewFarmer, NewProduct, Product, ProductPatch};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

/// Each operation checks a connection out of the pool for its own duration.
#[derive(Clone)]
pub struct PgFarmStore {
    pool: PgPool,
}

impl PgFarmStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FarmStore for PgFarmStore {
    async fn create_farmer(&self, farmer: NewFarmer) -> Result<Farmer> {
        Ok(sqlx::query_as::<_, Farmer>(
            "INSERT INTO farmer (name, phone) VALUES ($1, $2) RETURNING id, name, phone",
        )
        .bind(&farmer.name)
        .bind(&farmer.phone)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_farmers(&self) -> Result<Vec<Farmer>> {
        Ok(
            sqlx::query_as::<_, Farmer>("SELECT id, name, phone FROM farmer")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product> {
        Ok(sqlx::query_as::<_, Product>(
            r#"INSERT INTO product (farmer_id, name, category, price, quantity,
                image_url, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, farmer_id, name, category, price, quantity, image_url, updated_at"#,
        )
        .bind(product.farmer_id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(sqlx::query_as::<_, Product>(
            "SELECT id, farmer_id, name, category, price, quantity, image_url, updated_at
             FROM product",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        Ok(sqlx::query_as::<_, Product>(
            "SELECT id, farmer_id, name, category, price, quantity, image_url, updated_at
             FROM product WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update_product(&self, id: i32, patch: &ProductPatch) -> Result<Option<Product>> {
        let mut tx = self.pool.begin().await?;

        // Row lock keeps concurrent writers from interleaving read and write-back.
        let current = sqlx::query_as::<_, Product>(
            "SELECT id, farmer_id, name, category, price, quantity, image_url, updated_at
             FROM product WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut product) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        product.apply_patch(patch, Utc::now());

        let updated = sqlx::query_as::<_, Product>(
            r#"UPDATE product SET farmer_id = $2, name = $3, category = $4, price = $5,
                quantity = $6, image_url = $7, updated_at = $8
                WHERE id = $1
                RETURNING id, farmer_id, name, category, price, quantity, image_url, updated_at"#,
        )
        .bind(product.id)
        .bind(product.farmer_id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.image_url)
        .bind(product.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn delete_product(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
