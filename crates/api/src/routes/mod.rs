//! Route tree for the `/api/v1` surface.

pub mod admin;
pub mod appointments;
pub mod blog;
pub mod categories;
pub mod chat;
pub mod events;
pub mod health;
pub mod leads;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                              list (?category=), create (admin)
/// /products/{id}                         get, update (admin), delete (admin)
///
/// /categories                            list (?kind=), create (admin)
/// /categories/{id}                       update (admin), delete (admin)
///
/// /blog                                  list, create (admin)
/// /blog/related                          related posts (?category=&exclude=)
/// /blog/{slug}                           get by slug; update/delete by id (admin)
///
/// /events                                list, create (admin)
/// /events/{id}                           get, update (admin), delete (admin)
///
/// /appointments                          create (public), list (admin)
/// /appointments/{id}/status              update status (admin)
/// /appointments/{id}                     delete (admin)
///
/// /leads                                 create (public), list (admin)
/// /leads/{id}                            delete (admin)
///
/// /chat/sessions                         open session (public)
/// /chat/sessions/active                  active sessions (admin)
/// /chat/sessions/{id}/messages           list, post (sender-gated)
/// /chat/sessions/{id}/request-human      hand off to a human (public)
/// /chat/sessions/{id}/close              close session (public)
///
/// /admin/stats                           dashboard overview (admin)
/// /admin/uploads                         presigned upload URL (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/blog", blog::router())
        .nest("/events", events::router())
        .nest("/appointments", appointments::router())
        .nest("/leads", leads::router())
        .nest("/chat", chat::router())
        .nest("/admin", admin::router())
}
