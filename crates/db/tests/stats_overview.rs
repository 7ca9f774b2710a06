//! Repository-level tests for the dashboard aggregation, in particular the
//! tolerance for unregistered free-text category labels on products.

use maris_db::models::category::{CreateCategory, KIND_PRODUCT};
use maris_db::models::product::CreateProduct;
use maris_db::repositories::{CategoryRepo, ProductRepo, StatsRepo};
use sqlx::PgPool;

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        slug: name.to_lowercase(),
        kind: KIND_PRODUCT.to_string(),
        description: None,
    }
}

fn new_product(name: &str, category: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        category: category.to_string(),
        description: "equipamento de teste".to_string(),
        image_key: None,
        image_url: None,
        status: None,
        brand: None,
        specs: vec![],
    }
}

#[sqlx::test]
async fn category_counts_cover_registered_and_ad_hoc_labels(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("Radar")).await.unwrap();
    CategoryRepo::create(&pool, &new_category("Sonar")).await.unwrap();

    ProductRepo::create(&pool, &new_product("Radar X1", "Radar")).await.unwrap();
    ProductRepo::create(&pool, &new_product("Radar X2", "Radar")).await.unwrap();
    // Free-text label never registered as a category.
    ProductRepo::create(&pool, &new_product("Receptor G9", "GPS")).await.unwrap();

    let stats = StatsRepo::collect(&pool).await.unwrap();
    assert_eq!(stats.products, 3);

    let mut counts: Vec<(String, i64)> = stats
        .category_counts
        .iter()
        .map(|c| (c.name.clone(), c.count))
        .collect();
    counts.sort();
    assert_eq!(
        counts,
        vec![
            ("GPS".to_string(), 1),
            ("Radar".to_string(), 2),
            ("Sonar".to_string(), 0),
        ]
    );
}

#[sqlx::test]
async fn overview_counts_every_collection(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Radar X1", "Radar")).await.unwrap();

    let stats = StatsRepo::collect(&pool).await.unwrap();
    assert_eq!(stats.products, 1);
    assert_eq!(stats.leads, 0);
    assert_eq!(stats.appointments, 0);
    assert_eq!(stats.events, 0);
}
