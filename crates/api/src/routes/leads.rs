//! Route definitions for contact leads.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// POST   /          -> create (public)
/// GET    /          -> list (admin)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(leads::create).get(leads::list))
        .route("/{id}", delete(leads::delete))
}
