//! Repository for the `events` table.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "\
    id, title, description, starts_on, starts_at, location, kind, image_key, \
    image_url, featured, content, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Create an event.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                 (title, description, starts_on, starts_at, location, kind, \
                  image_key, image_url, featured, content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_on)
            .bind(&input.starts_at)
            .bind(&input.location)
            .bind(&input.kind)
            .bind(&input.image_key)
            .bind(&input.image_url)
            .bind(input.featured)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all events, most recent date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY starts_on DESC, id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an event. Returns `None` if no event with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 starts_on = COALESCE($4, starts_on), \
                 starts_at = COALESCE($5, starts_at), \
                 location = COALESCE($6, location), \
                 kind = COALESCE($7, kind), \
                 image_key = COALESCE($8, image_key), \
                 image_url = COALESCE($9, image_url), \
                 featured = COALESCE($10, featured), \
                 content = COALESCE($11, content), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_on)
            .bind(&input.starts_at)
            .bind(&input.location)
            .bind(&input.kind)
            .bind(&input.image_key)
            .bind(&input.image_url)
            .bind(input.featured)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
