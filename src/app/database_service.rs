//! Process-wide store handle.
//!
//! Owns the PostgreSQL connection pool for the lifetime of the server:
//! 1.  Connects and sizes the pool from configuration.
//! 2.  Creates the `farmer` and `product` tables when missing.
//! 3.  Hands out a `FarmStore` backed by the pool to the HTTP layer.
//! 4.  Drains the pool on shutdown.

use crate::infra::config;
use crate::storage::PgFarmStore;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Connects using `DATABASE_URL` / `DB_MAX_CONNECTIONS`.
    pub async fn new() -> Result<Self, anyhow::Error> {
        dotenv::dotenv().ok();
        let database_url = config::database_url()?;
        let max_connections = config::db_max_connections()?;
        Self::connect(&database_url, max_connections).await
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!(max_connections, "connected to postgres");

        let service = Self { pool };
        service.ensure_schema().await?;
        Ok(service)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn store(&self) -> PgFarmStore {
        PgFarmStore::new(self.pool.clone())
    }

    /// Idempotent table creation.
    pub async fn ensure_schema(&self) -> Result<(), anyhow::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS farmer (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                phone TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        // `farmer_id` is a soft reference to `farmer.id`: products may point at
        // farmers that do not exist, so no constraint is declared.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS product (
                id SERIAL PRIMARY KEY,
                farmer_id INTEGER,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                quantity INTEGER NOT NULL,
                image_url TEXT,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        // Tables created by earlier builds carried an enforced foreign key.
        sqlx::query("ALTER TABLE product DROP CONSTRAINT IF EXISTS product_farmer_id_fkey")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Waits for checked-out connections to be returned, then closes them.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("postgres pool closed");
    }
}
