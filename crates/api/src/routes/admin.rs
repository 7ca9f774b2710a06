//! Route definitions for the back-office dashboard and uploads.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{stats, uploads};
use crate::state::AppState;

/// Routes mounted at `/admin`. All admin-gated.
///
/// ```text
/// GET    /stats     -> stats::overview
/// POST   /uploads   -> uploads::generate_upload_url
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats::overview))
        .route("/uploads", post(uploads::generate_upload_url))
}
