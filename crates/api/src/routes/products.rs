//! Handlers for the product catalog.
//!
//! Read paths address products and categories by slug; write paths
//! validate the referenced category before touching the products table.
//! Deletion is logical (clears the active flag).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use validator::Validate;

use storefront_core::error::CoreError;
use storefront_core::taxonomy;
use storefront_core::types::DbId;
use storefront_db::models::category::Category;
use storefront_db::models::product::CreateProduct;
use storefront_db::repositories::{CategoryRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::response::Ack;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/detail/{slug}", get(product_detail))
        .route(
            "/{slug}",
            get(products_by_category)
                .put(update_product)
                .delete(delete_product),
        )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a category exists, returning the full row.
async fn ensure_category_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("category", id)))
}

/// Reject payloads that fail field-level validation (empty name,
/// negative stock or price).
fn validate_payload(input: &CreateProduct) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

// ---------------------------------------------------------------------------
// GET /products
// ---------------------------------------------------------------------------

/// List every active, in-stock product in an active category.
///
/// An empty catalog is a valid answer: the response is `[]` with 200.
async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ProductRepo::list_available(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed available products");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /products
// ---------------------------------------------------------------------------

/// Create a new product.
///
/// The referenced category must exist (404 otherwise, nothing
/// inserted). Returns an acknowledgment only, not the created row.
async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;
    ensure_category_exists(&state.pool, input.category).await?;

    ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(name = %input.name, category_id = input.category, "Product created");
    Ok((StatusCode::CREATED, Json(Ack::created())))
}

// ---------------------------------------------------------------------------
// GET /products/{category_slug}
// ---------------------------------------------------------------------------

/// List available products in a category and its direct sub-categories.
///
/// The category slug must resolve (404 otherwise); an empty product set
/// is a valid answer. Expansion is one level only -- see
/// `storefront_core::taxonomy` for the policy.
async fn products_by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("category", &slug)))?;

    let children = CategoryRepo::list_children(&state.pool, category.id).await?;
    let links: Vec<_> = children.iter().map(Category::link).collect();
    let ids = taxonomy::one_level_ids(category.id, &links);

    let items = ProductRepo::list_by_categories(&state.pool, &ids).await?;
    tracing::debug!(
        category = %slug,
        categories = ids.len(),
        count = items.len(),
        "Listed products by category"
    );
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// GET /products/detail/{product_slug}
// ---------------------------------------------------------------------------

/// Get the first active, in-stock product with the given slug.
async fn product_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_available_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("product", &slug)))?;
    Ok(Json(product))
}

// ---------------------------------------------------------------------------
// PUT /products/{product_slug}
// ---------------------------------------------------------------------------

/// Replace every mutable field of an existing product.
///
/// The slug must resolve to a product (active or not) and the new
/// category id must exist; both failures are 404 and leave the row
/// untouched. Rating and the active flag are never modified here.
async fn update_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let product = ProductRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("product", &slug)))?;
    ensure_category_exists(&state.pool, input.category).await?;

    ProductRepo::update(&state.pool, product.id, &input).await?;
    tracing::info!(id = product.id, name = %input.name, "Product updated");
    Ok(Json(Ack::ok("Product update is successful")))
}

// ---------------------------------------------------------------------------
// DELETE /products/{product_slug}
// ---------------------------------------------------------------------------

/// Logically delete a product.
///
/// Only ACTIVE products can be deleted; a second delete of the same
/// slug is 404. The row itself is kept.
async fn delete_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("product", &slug)))?;

    ProductRepo::deactivate(&state.pool, product.id).await?;
    tracing::info!(id = product.id, slug = %slug, "Product deactivated");
    Ok(Json(Ack::ok("Product delete is successful")))
}
