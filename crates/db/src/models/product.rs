//! Product model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::types::DbId;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub stock: i32,
    pub category_id: DbId,
    pub rating: f64,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a product, and the full replacement payload for
/// updates. The slug is derived from `name`; `rating` and `is_active`
/// are never part of the payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub image_url: String,
    /// Stock count; non-negative by contract and by schema CHECK.
    #[validate(range(min = 0))]
    pub stock: i32,
    /// Target category id, validated against `categories` before any write.
    pub category: DbId,
}
