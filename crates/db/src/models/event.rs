//! Event entity model and DTOs.

use chrono::NaiveDate;
use maris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub starts_on: NaiveDate,
    /// Free-form time of day, e.g. `"09:00"`.
    pub starts_at: Option<String>,
    pub location: String,
    /// Event kind label, e.g. `"feira"`, `"workshop"`.
    pub kind: String,
    #[serde(skip_serializing)]
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub starts_on: NaiveDate,
    pub starts_at: Option<String>,
    pub location: String,
    pub kind: String,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub content: Option<String>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub starts_at: Option<String>,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub image_key: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub content: Option<String>,
}
