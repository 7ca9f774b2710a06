//! Route definitions for appointment requests.

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::appointments;
use crate::state::AppState;

/// Routes mounted at `/appointments`.
///
/// ```text
/// POST   /              -> create (public)
/// GET    /              -> list (admin)
/// PUT    /{id}/status   -> update_status (admin)
/// DELETE /{id}          -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(appointments::create).get(appointments::list),
        )
        .route("/{id}/status", put(appointments::update_status))
        .route("/{id}", delete(appointments::delete))
}
