//! Handlers for the `/appointments` resource.
//!
//! Any visitor may request an appointment; reading and managing requests
//! is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maris_core::error::CoreError;
use maris_core::types::DbId;
use maris_db::models::appointment::{Appointment, AppointmentStatus, CreateAppointment};
use maris_db::repositories::AppointmentRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /appointments/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// POST /api/v1/appointments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    let appointment = AppointmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/v1/appointments
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Appointment>>> {
    let appointments = AppointmentRepo::list(&state.pool).await?;
    Ok(Json(appointments))
}

/// PUT /api/v1/appointments/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Appointment>> {
    let status = AppointmentStatus::parse(&input.status).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "unknown appointment status: {}",
            input.status
        )))
    })?;
    let appointment = AppointmentRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Appointment", id)))?;
    Ok(Json(appointment))
}

/// DELETE /api/v1/appointments/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AppointmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Appointment", id)))
    }
}
