//! Integration tests for logical (soft) deletion.
//!
//! Deletion only clears the active flag; rows are never removed. The
//! inactive state is terminal for this service (no restore operation),
//! so a second deactivation of the same row must report failure.

use sqlx::PgPool;
use storefront_db::models::category::CreateCategory;
use storefront_db::models::product::CreateProduct;
use storefront_db::repositories::{CategoryRepo, ProductRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_product(pool: &PgPool, name: &str) -> i64 {
    let cat = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: format!("{name} category"),
            parent_id: None,
        },
    )
    .await
    .unwrap();
    ProductRepo::create(
        pool,
        &CreateProduct {
            name: name.to_string(),
            description: "soft delete test".to_string(),
            price: 1.0,
            image_url: "https://example.com/img.png".to_string(),
            stock: 1,
            category: cat.id,
        },
    )
    .await
    .unwrap();
    ProductRepo::find_by_slug(pool, &storefront_core::slug::slugify(name))
        .await
        .unwrap()
        .unwrap()
        .id
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_clears_flag_but_keeps_row(pool: PgPool) {
    let id = seed_product(&pool, "Keep The Row").await;

    let deleted = ProductRepo::deactivate(&pool, id).await.unwrap();
    assert!(deleted, "first deactivate should report success");

    // Row still exists, just inactive.
    let row = ProductRepo::find_by_slug(&pool, "keep-the-row")
        .await
        .unwrap()
        .expect("row must survive logical deletion");
    assert!(!row.is_active);
    assert_eq!(ProductRepo::count_all(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_twice_fails_second_time(pool: PgPool) {
    let id = seed_product(&pool, "Delete Twice").await;

    assert!(ProductRepo::deactivate(&pool, id).await.unwrap());
    assert!(
        !ProductRepo::deactivate(&pool, id).await.unwrap(),
        "second deactivate must report no active row"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivated_product_hidden_from_active_lookup(pool: PgPool) {
    let id = seed_product(&pool, "Hide Me").await;
    ProductRepo::deactivate(&pool, id).await.unwrap();

    let active = ProductRepo::find_active_by_slug(&pool, "hide-me")
        .await
        .unwrap();
    assert!(active.is_none());

    let available = ProductRepo::find_available_by_slug(&pool, "hide-me")
        .await
        .unwrap();
    assert!(available.is_none());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_deactivate_hides_from_active_list(pool: PgPool) {
    let cat = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Seasonal".to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap();

    assert!(CategoryRepo::deactivate(&pool, cat.id).await.unwrap());

    let active = CategoryRepo::list_active(&pool).await.unwrap();
    assert!(!active.iter().any(|c| c.id == cat.id));

    // Slug lookup still resolves inactive categories.
    let by_slug = CategoryRepo::find_by_slug(&pool, "seasonal").await.unwrap();
    assert!(by_slug.is_some());

    // Second deactivate reports no active row.
    assert!(!CategoryRepo::deactivate(&pool, cat.id).await.unwrap());
}
