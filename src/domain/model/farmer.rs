use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted farmer row (`farmer` table).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow, ToSchema)]
pub struct Farmer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
}

/// Body of `POST /farmers`. The id is generated by the store, so any `id`
/// supplied by the client is ignored during deserialization.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct NewFarmer {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewFarmer {
    /// Builds the stored row once a store has assigned the id. Used by
    /// `FarmStore` implementations that do not generate rows in SQL.
    pub fn into_farmer(self, id: i32) -> Farmer {
        Farmer {
            id,
            name: self.name,
            phone: self.phone,
        }
    }
}
