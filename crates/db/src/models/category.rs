//! Category model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::taxonomy::CategoryLink;
use storefront_core::types::DbId;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<DbId>,
    pub is_active: bool,
}

impl Category {
    /// Project this row down to its position in the taxonomy forest.
    pub fn link(&self) -> CategoryLink {
        CategoryLink {
            id: self.id,
            parent_id: self.parent_id,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new category. The slug is derived from `name`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1))]
    pub name: String,
    /// Parent category id; `None` makes this a top-level category.
    pub parent_id: Option<DbId>,
}

/// DTO for updating a category. Full replacement: the slug is
/// recomputed from `name`, and `parent_id` is overwritten (including
/// back to `None`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1))]
    pub name: String,
    pub parent_id: Option<DbId>,
}
