//! Repository for the `categories` table.
//!
//! Categories form a two-level forest via `parent_id`. Deletion is
//! logical: rows are deactivated, never removed.

use sqlx::PgPool;
use storefront_core::slug::slugify;
use storefront_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "id, name, slug, parent_id, is_active";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Find a category by its id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its slug, active or not.
    ///
    /// The read paths that resolve a category slug intentionally do not
    /// filter on the active flag.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List the direct children of a category.
    pub async fn list_children(
        pool: &PgPool,
        parent_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE parent_id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// List all active categories.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE is_active");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Insert a new category with a slug derived from its name.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug, parent_id) \
             VALUES ($1, $2, $3) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(slugify(&input.name))
            .bind(input.parent_id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a category's name (recomputing the slug) and parent.
    ///
    /// Returns `None` if no category with the given id exists. The
    /// active flag is left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, slug = $3, parent_id = $4 \
             WHERE id = $1 \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(slugify(&input.name))
            .bind(input.parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Logically delete a category by clearing its active flag.
    ///
    /// Returns `true` if an active category was deactivated; `false` if
    /// the category does not exist or was already inactive.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE categories SET is_active = FALSE WHERE id = $1 AND is_active")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
