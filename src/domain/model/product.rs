use super::patch::ProductPatch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted product row (`product` table).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    /// Soft reference to `farmer.id`.
    pub farmer_id: Option<i32>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /products`.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct NewProduct {
    #[serde(default)]
    pub farmer_id: Option<i32>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Builds the stored row once a store has assigned the id and creation
    /// time. Used by `FarmStore` implementations that do not generate rows
    /// in SQL.
    pub fn into_product(self, id: i32, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            farmer_id: self.farmer_id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url,
            updated_at: created_at,
        }
    }
}

impl Product {
    /// Overwrites every field present in `patch`, then refreshes `updated_at`.
    ///
    /// `updated_at` never moves backwards: if the clock reads earlier than the
    /// stored value, the stored value is kept.
    pub fn apply_patch(&mut self, patch: &ProductPatch, now: DateTime<Utc>) {
        if let Some(farmer_id) = patch.farmer_id {
            self.farmer_id = farmer_id;
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = image_url.clone();
        }
        self.updated_at = now.max(self.updated_at);
    }
}
