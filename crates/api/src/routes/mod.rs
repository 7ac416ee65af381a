pub mod categories;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                       list (GET), create (POST)
/// /products/{category_slug}       list by category + direct children (GET)
/// /products/detail/{product_slug} product detail (GET)
/// /products/{product_slug}        full update (PUT), logical delete (DELETE)
///
/// /categories                     list (GET), create (POST)
/// /categories/{id}                update (PUT), logical delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
}
