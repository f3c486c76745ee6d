//! Partial updates for products.
//!
//! `PUT /products/{id}` accepts an arbitrary JSON object. Each key naming a
//! mutable product attribute is type-checked and captured here; any other key
//! (including `id` and `updated_at`) is ignored.

use serde_json::{Map, Value as JsonValue};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PatchError {
    #[error("field '{field}' expected {expected}, got {got}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// Typed view of an update payload. `None` means "leave unchanged"; for the
/// nullable columns `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub farmer_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub image_url: Option<Option<String>>,
}

impl ProductPatch {
    pub fn from_fields(fields: &Map<String, JsonValue>) -> Result<Self, PatchError> {
        let mut patch = ProductPatch::default();
        for (key, value) in fields {
            match key.as_str() {
                "farmer_id" => patch.farmer_id = Some(nullable(value, "farmer_id", as_i32)?),
                "name" => patch.name = Some(as_text(value, "name")?),
                "category" => patch.category = Some(as_text(value, "category")?),
                "price" => patch.price = Some(as_f64(value, "price")?),
                "quantity" => patch.quantity = Some(as_i32(value, "quantity")?),
                "image_url" => patch.image_url = Some(nullable(value, "image_url", as_text)?),
                _ => {}
            }
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        *self == ProductPatch::default()
    }
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn nullable<T>(
    v: &JsonValue,
    field: &'static str,
    parse: fn(&JsonValue, &'static str) -> Result<T, PatchError>,
) -> Result<Option<T>, PatchError> {
    if v.is_null() {
        return Ok(None);
    }
    parse(v, field).map(Some)
}

fn as_text(v: &JsonValue, field: &'static str) -> Result<String, PatchError> {
    v.as_str().map(str::to_string).ok_or(PatchError::WrongType {
        field,
        expected: "string",
        got: json_kind(v),
    })
}

fn as_f64(v: &JsonValue, field: &'static str) -> Result<f64, PatchError> {
    v.as_f64().ok_or(PatchError::WrongType {
        field,
        expected: "number",
        got: json_kind(v),
    })
}

fn as_i32(v: &JsonValue, field: &'static str) -> Result<i32, PatchError> {
    let n = v.as_i64().ok_or(PatchError::WrongType {
        field,
        expected: "integer",
        got: json_kind(v),
    })?;
    i32::try_from(n).map_err(|_| PatchError::OutOfRange {
        field,
        value: n.to_string(),
    })
}
