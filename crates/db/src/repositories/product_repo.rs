//! Repository for the `products` table.
//!
//! Availability means `is_active AND stock > 0`. Product slugs are not
//! unique, so slug lookups take the first match in database order;
//! mutations resolve the slug to an id first and then write by id, so a
//! duplicate slug never causes a multi-row write.

use sqlx::PgPool;
use storefront_core::slug::slugify;
use storefront_core::types::DbId;

use crate::models::product::{CreateProduct, Product};

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "\
    id, name, slug, description, price, image_url, stock, \
    category_id, rating, is_active";

/// Provides catalog queries and CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    // -----------------------------------------------------------------------
    // Catalog queries
    // -----------------------------------------------------------------------

    /// List every available product whose category is also active.
    ///
    /// This is the storefront listing: product active, category active,
    /// stock positive. Ordering is database-default.
    pub async fn list_available(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT p.id, p.name, p.slug, p.description, p.price, p.image_url, \
                    p.stock, p.category_id, p.rating, p.is_active \
             FROM products p \
             JOIN categories c ON c.id = p.category_id \
             WHERE p.is_active AND c.is_active AND p.stock > 0",
        )
        .fetch_all(pool)
        .await
    }

    /// List available products in any of the given categories.
    ///
    /// The category active flag is deliberately not re-checked here:
    /// the caller has already resolved the category set.
    pub async fn list_by_categories(
        pool: &PgPool,
        category_ids: &[DbId],
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE category_id = ANY($1) AND is_active AND stock > 0"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(category_ids)
            .fetch_all(pool)
            .await
    }

    /// Find the first available product with the given slug.
    ///
    /// Slugs are not unique; with duplicates this returns one row in
    /// database order, stable across calls for an unchanged table.
    pub async fn find_available_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE slug = $1 AND is_active AND stock > 0"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find the first product with the given slug, active or not.
    ///
    /// Used by the update path, which must reach inactive rows too.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find the first ACTIVE product with the given slug (stock ignored).
    ///
    /// Used by the delete path: already-inactive products are treated
    /// as not found, which makes a second delete of the same slug fail.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Insert a new product.
    ///
    /// The slug is derived from the name and the rating starts at zero.
    /// The active flag is left to the schema default (TRUE), matching
    /// the contract that creation does not set it explicitly. The
    /// caller is responsible for having validated `input.category`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO products \
                 (name, slug, description, price, image_url, stock, category_id, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0.0)",
        )
        .bind(&input.name)
        .bind(slugify(&input.name))
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.stock)
        .bind(input.category)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite every mutable field of the product with the given id.
    ///
    /// Full replacement: name, recomputed slug, description, price,
    /// image_url, stock, category_id. Rating and the active flag are
    /// left untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateProduct,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE products SET \
                 name = $2, slug = $3, description = $4, price = $5, \
                 image_url = $6, stock = $7, category_id = $8 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(slugify(&input.name))
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.stock)
        .bind(input.category)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Logically delete a product by clearing its active flag.
    ///
    /// Returns `true` if an active product was deactivated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE products SET is_active = FALSE WHERE id = $1 AND is_active")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total row count, active or not. Test support for verifying that
    /// rejected writes left the table unchanged.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }
}
