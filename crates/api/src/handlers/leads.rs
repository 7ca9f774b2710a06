//! Handlers for the `/leads` resource.
//!
//! Any visitor may submit a lead; reading and deleting them is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maris_core::error::CoreError;
use maris_core::types::DbId;
use maris_db::models::lead::{CreateLead, Lead};
use maris_db::repositories::LeadRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/leads
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<(StatusCode, Json<Lead>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    let lead = LeadRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// GET /api/v1/leads
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Lead>>> {
    let leads = LeadRepo::list(&state.pool).await?;
    Ok(Json(leads))
}

/// DELETE /api/v1/leads/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LeadRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Lead", id)))
    }
}
