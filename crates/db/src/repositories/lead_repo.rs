//! Repository for the `leads` table.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::lead::{CreateLead, Lead};

/// Column list for `leads` queries.
const LEAD_COLUMNS: &str = "id, name, email, phone, subject, message, created_at";

/// Provides CRUD operations for contact leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Create a lead.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, subject, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {LEAD_COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all leads, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// Delete a lead by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
