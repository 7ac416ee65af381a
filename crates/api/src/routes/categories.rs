//! Handlers for category management.
//!
//! Categories form a two-level forest (top-level rows have no parent).
//! The tree shape is a read-side policy, not a write-side constraint:
//! creation validates only that a referenced parent exists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use validator::Validate;

use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_db::models::category::{CreateCategory, UpdateCategory};
use storefront_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::Ack;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", axum::routing::put(update_category).delete(delete_category))
}

/// Verify that a parent category exists when one is referenced.
async fn ensure_parent_exists(pool: &sqlx::PgPool, parent_id: Option<DbId>) -> AppResult<()> {
    if let Some(parent_id) = parent_id {
        CategoryRepo::find_by_id(pool, parent_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("category", parent_id)))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List all active categories.
async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CategoryRepo::list_active(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed categories");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /categories
// ---------------------------------------------------------------------------

/// Create a category. The slug is derived from the name and unique at
/// the schema level (a duplicate surfaces as 409).
async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    ensure_parent_exists(&state.pool, input.parent_id).await?;

    let created = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, slug = %created.slug, "Category created");
    Ok((StatusCode::CREATED, Json(Ack::created())))
}

// ---------------------------------------------------------------------------
// PUT /categories/{id}
// ---------------------------------------------------------------------------

/// Overwrite a category's name (slug recomputed) and parent.
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    ensure_parent_exists(&state.pool, input.parent_id).await?;

    let updated = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("category", id)))?;
    tracing::info!(id = updated.id, slug = %updated.slug, "Category updated");
    Ok(Json(Ack::ok("Category update is successful")))
}

// ---------------------------------------------------------------------------
// DELETE /categories/{id}
// ---------------------------------------------------------------------------

/// Logically delete a category. Already-inactive categories are 404.
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::deactivate(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("category", id)));
    }
    tracing::info!(id, "Category deactivated");
    Ok(Json(Ack::ok("Category delete is successful")))
}
