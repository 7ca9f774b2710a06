//! Repository for the `appointments` table.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::{Appointment, AppointmentStatus, CreateAppointment};

/// Column list for `appointments` queries.
const APPOINTMENT_COLUMNS: &str = "\
    id, customer_name, email, phone, service_type, location, scheduled_on, \
    scheduled_at, message, status, created_at, updated_at";

/// Provides CRUD operations for appointment requests.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Create an appointment request. New requests always start `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments \
                 (customer_name, email, phone, service_type, location, \
                  scheduled_on, scheduled_at, message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {APPOINTMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(&input.customer_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.service_type)
            .bind(&input.location)
            .bind(input.scheduled_on)
            .bind(&input.scheduled_at)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all appointment requests, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Appointment>, sqlx::Error> {
        let query =
            format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Appointment>(&query).fetch_all(pool).await
    }

    /// Set an appointment's status. Returns `None` if no appointment with
    /// the given ID exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {APPOINTMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete an appointment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
