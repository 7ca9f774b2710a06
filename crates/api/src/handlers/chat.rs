//! Handlers for the `/chat` resource.
//!
//! The message gateway enforces the two hard invariants of the chat:
//! nobody may post as the bot (not even an admin), and posting as the
//! admin requires passing the admin gate. User messages additionally
//! enqueue a job for the server-side bot responder.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use maris_core::error::{CoreError, MSG_NOT_AUTHENTICATED, MSG_RESTRICTED};
use maris_core::types::DbId;
use maris_db::models::chat::{
    ChatMessage, ChatSession, CreateChatSession, PostChatMessage, Sender, SessionStatus,
};
use maris_db::repositories::ChatRepo;

use crate::chat::responder::BotJob;
use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::middleware::auth::OptionalIdentity;
use crate::state::AppState;

/// POST /api/v1/chat/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Json(input): Json<CreateChatSession>,
) -> AppResult<(StatusCode, Json<ChatSession>)> {
    let session = ChatRepo::create_session(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/chat/sessions/active
///
/// Back-office inbox: sessions not yet closed, most recent activity first.
pub async fn list_active_sessions(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ChatSession>>> {
    let sessions = ChatRepo::list_active(&state.pool).await?;
    Ok(Json(sessions))
}

/// GET /api/v1/chat/sessions/{id}/messages
pub async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    ChatRepo::find_session(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("ChatSession", id)))?;
    let messages = ChatRepo::list_messages(&state.pool, id).await?;
    Ok(Json(messages))
}

/// POST /api/v1/chat/sessions/{id}/messages
pub async fn add_message(
    State(state): State<AppState>,
    identity: OptionalIdentity,
    Path(id): Path<DbId>,
    Json(input): Json<PostChatMessage>,
) -> AppResult<(StatusCode, Json<ChatMessage>)> {
    match input.sender {
        // Rejected before any identity check: the bot sender is reserved
        // for the internal responder path, admins included.
        Sender::Bot => {
            return Err(AppError::Core(CoreError::SecurityViolation(
                "clients may not send messages as the bot".into(),
            )))
        }
        Sender::Admin => {
            let identity = identity.0.ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(MSG_NOT_AUTHENTICATED.into()))
            })?;
            if !state.config.admin.is_admin(&identity.email) {
                return Err(AppError::Core(CoreError::Forbidden(MSG_RESTRICTED.into())));
            }
        }
        Sender::User => {}
    }

    let message = ChatRepo::append_message(
        &state.pool,
        id,
        input.sender,
        &input.body,
        input.options.as_ref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::not_found("ChatSession", id)))?;

    if input.sender == Sender::User {
        // The responder only dies at shutdown; a dropped job is logged, and
        // the session remains answerable through the back office.
        if state
            .bot_queue
            .send(BotJob {
                session_id: id,
                body: input.body.clone(),
            })
            .is_err()
        {
            tracing::warn!(session_id = id, "chat responder queue is closed");
        }
    }

    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/v1/chat/sessions/{id}/request-human
pub async fn request_human(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChatSession>> {
    let session = ChatRepo::set_status(&state.pool, id, SessionStatus::Human)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("ChatSession", id)))?;
    Ok(Json(session))
}

/// POST /api/v1/chat/sessions/{id}/close
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChatSession>> {
    let session = ChatRepo::set_status(&state.pool, id, SessionStatus::Closed)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("ChatSession", id)))?;
    Ok(Json(session))
}
