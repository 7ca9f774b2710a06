//! Repository for the `categories` table.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory, KIND_PRODUCT};

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "id, name, slug, kind, description, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Create a category.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug, kind, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.kind)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List categories, optionally filtered by kind.
    pub async fn list(pool: &PgPool, kind: Option<&str>) -> Result<Vec<Category>, sqlx::Error> {
        match kind {
            Some(kind) => {
                let query =
                    format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE kind = $1 ORDER BY id");
                sqlx::query_as::<_, Category>(&query)
                    .bind(kind)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
                sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
            }
        }
    }

    /// Names of all registered product categories, in registration order.
    ///
    /// Used by the stats aggregation and the chat bot's catalog options.
    pub async fn product_category_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM categories WHERE kind = $1 ORDER BY id")
            .bind(KIND_PRODUCT)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Returns `None` if no category with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                 name = COALESCE($2, name), \
                 slug = COALESCE($3, slug), \
                 kind = COALESCE($4, kind), \
                 description = COALESCE($5, description), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.kind)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
