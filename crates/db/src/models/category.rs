//! Category entity model and DTOs.
//!
//! Categories populate filter UIs. They are not hard foreign keys: the
//! `category` value on products, blog posts, and events is free text that
//! happens to match a registered name.

use maris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category kind for products.
pub const KIND_PRODUCT: &str = "product";
/// Category kind for blog posts.
pub const KIND_BLOG: &str = "blog";
/// Category kind for events.
pub const KIND_EVENT: &str = "event";

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// One of `product`, `blog`, `event`.
    pub kind: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub slug: String,
    pub kind: String,
    pub description: Option<String>,
}

/// DTO for updating an existing category. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
}
