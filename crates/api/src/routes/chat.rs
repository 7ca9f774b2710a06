//! Route definitions for the live chat.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted at `/chat`.
///
/// ```text
/// POST   /sessions                       -> create_session (public)
/// GET    /sessions/active                -> list_active_sessions (admin)
/// GET    /sessions/{id}/messages         -> get_messages
/// POST   /sessions/{id}/messages         -> add_message (sender-gated)
/// POST   /sessions/{id}/request-human    -> request_human (public)
/// POST   /sessions/{id}/close            -> close_session (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(chat::create_session))
        .route("/sessions/active", get(chat::list_active_sessions))
        .route(
            "/sessions/{id}/messages",
            get(chat::get_messages).post(chat::add_message),
        )
        .route("/sessions/{id}/request-human", post(chat::request_human))
        .route("/sessions/{id}/close", post(chat::close_session))
}
