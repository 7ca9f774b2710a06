//! Blog post entity model and DTOs.

use maris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    /// Unique by convention only; lookups take the first match.
    pub slug: String,
    pub excerpt: String,
    /// Rich text / HTML produced by the back-office editor.
    pub content: String,
    pub author: String,
    pub published_at: Timestamp,
    #[serde(skip_serializing)]
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    pub read_time_mins: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_at: Timestamp,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
    /// Defaults to 5 if omitted.
    pub read_time_mins: Option<i32>,
}

/// DTO for updating an existing blog post. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<Timestamp>,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub read_time_mins: Option<i32>,
}
