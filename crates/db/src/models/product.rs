//! Product entity model and DTOs.

use maris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
///
/// `image_url` holds the literal fallback URL in the database; handlers
/// overwrite it with the resolved URL before serializing, so responses
/// always carry a usable link.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Free-text category label; see the categories table.
    pub category: String,
    pub description: String,
    /// Stored-file reference in the object store, resolved at read time.
    #[serde(skip_serializing)]
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub brand: Option<String>,
    pub specs: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to `available` if omitted.
    pub status: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub specs: Vec<String>,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub brand: Option<String>,
    pub specs: Option<Vec<String>>,
}
