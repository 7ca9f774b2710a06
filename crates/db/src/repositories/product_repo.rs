//! Repository for the `products` table.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "\
    id, name, category, description, image_key, image_url, status, brand, \
    specs, created_at, updated_at";

/// Status assigned to products created without one.
const DEFAULT_STATUS: &str = "available";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Create a product.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                 (name, category, description, image_key, image_url, status, brand, specs) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_key)
            .bind(&input.image_url)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(&input.brand)
            .bind(&input.specs)
            .fetch_one(pool)
            .await
    }

    /// List products, optionally filtered by category label.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Product>, sqlx::Error> {
        match category {
            Some(cat) => {
                let query =
                    format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1 ORDER BY id");
                sqlx::query_as::<_, Product>(&query)
                    .bind(cat)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
                sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a product. Returns `None` if no product with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 category = COALESCE($3, category), \
                 description = COALESCE($4, description), \
                 image_key = COALESCE($5, image_key), \
                 image_url = COALESCE($6, image_url), \
                 status = COALESCE($7, status), \
                 brand = COALESCE($8, brand), \
                 specs = COALESCE($9, specs), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.image_key)
            .bind(&input.image_url)
            .bind(&input.status)
            .bind(&input.brand)
            .bind(&input.specs)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
