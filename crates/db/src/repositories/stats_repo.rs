//! Back-office dashboard aggregation.

use maris_core::stats::{merge_category_counts, CategoryCount};
use serde::Serialize;
use sqlx::PgPool;

use crate::models::category::KIND_PRODUCT;

/// Aggregated counts shown on the admin dashboard.
#[derive(Debug, Serialize)]
pub struct StatsOverview {
    pub products: i64,
    pub leads: i64,
    pub appointments: i64,
    pub events: i64,
    /// One entry per distinct category label seen across registered
    /// categories and product rows, registered labels first.
    pub category_counts: Vec<CategoryCount>,
}

/// Computes the dashboard overview.
pub struct StatsRepo;

impl StatsRepo {
    pub async fn collect(pool: &PgPool) -> Result<StatsOverview, sqlx::Error> {
        let products = Self::count(pool, "products").await?;
        let leads = Self::count(pool, "leads").await?;
        let appointments = Self::count(pool, "appointments").await?;
        let events = Self::count(pool, "events").await?;

        let registered: Vec<String> =
            sqlx::query_scalar("SELECT name FROM categories WHERE kind = $1 ORDER BY id")
                .bind(KIND_PRODUCT)
                .fetch_all(pool)
                .await?;

        // Category labels on products are free text; labels that were never
        // registered still get a bucket rather than being dropped.
        let counted: Vec<(String, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*) FROM products GROUP BY category ORDER BY category",
        )
        .fetch_all(pool)
        .await?;

        Ok(StatsOverview {
            products,
            leads,
            appointments,
            events,
            category_counts: merge_category_counts(&registered, &counted),
        })
    }

    async fn count(pool: &PgPool, table: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
    }
}
