//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maris_core::error::CoreError;
use maris_core::types::DbId;
use maris_db::models::event::{CreateEvent, Event, UpdateEvent};
use maris_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::files::resolve_image;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

async fn with_resolved_image(state: &AppState, mut event: Event) -> Event {
    let resolved = resolve_image(
        state.store.as_deref(),
        event.image_key.as_deref(),
        event.image_url.as_deref(),
    )
    .await;
    event.image_url = Some(resolved);
    event
}

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.pool).await?;
    let mut resolved = Vec::with_capacity(events.len());
    for event in events {
        resolved.push(with_resolved_image(&state, event).await);
    }
    Ok(Json(resolved))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Event", id)))?;
    Ok(Json(with_resolved_image(&state, event).await))
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(with_resolved_image(&state, event).await),
    ))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Event", id)))?;
    Ok(Json(with_resolved_image(&state, event).await))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Event", id)))
    }
}
