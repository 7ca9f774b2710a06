//! Route definitions for the blog.
//!
//! Public reads address posts by slug; back-office writes address them by
//! numeric id on the same path segment.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create (admin)
/// GET    /related   -> related (?category=&exclude=)
/// GET    /{slug}    -> get_by_slug
/// PUT    /{slug}    -> update by id (admin)
/// DELETE /{slug}    -> delete by id (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list).post(blog::create))
        .route("/related", get(blog::related))
        .route(
            "/{slug}",
            get(blog::get_by_slug).put(blog::update).delete(blog::delete),
        )
}
