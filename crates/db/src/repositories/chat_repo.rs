//! Repository for the `chat_sessions` and `chat_messages` tables.
//!
//! Messages are append-only. Every append also advances the session's
//! `last_message_at` to the message timestamp, in one transaction, so the
//! active-session ordering tracks real activity.

use maris_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat::{ChatMessage, ChatSession, CreateChatSession, Sender, SessionStatus};

/// Column list for `chat_sessions` queries.
const SESSION_COLUMNS: &str = "id, status, user_name, last_message_at, created_at";

/// Column list for `chat_messages` queries.
const MESSAGE_COLUMNS: &str = "id, session_id, sender, body, options, created_at";

/// Provides session and message operations for the live chat.
pub struct ChatRepo;

impl ChatRepo {
    // -----------------------------------------------------------------------
    // Sessions
    // -----------------------------------------------------------------------

    /// Open a new session in the `bot` state.
    pub async fn create_session(
        pool: &PgPool,
        input: &CreateChatSession,
    ) -> Result<ChatSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_sessions (user_name) VALUES ($1) RETURNING {SESSION_COLUMNS}"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(&input.user_name)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its ID.
    pub async fn find_session(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ChatSession>, sqlx::Error> {
        let query = format!("SELECT {SESSION_COLUMNS} FROM chat_sessions WHERE id = $1");
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set a session's status. Idempotent; returns `None` if no session
    /// with the given ID exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: SessionStatus,
    ) -> Result<Option<ChatSession>, sqlx::Error> {
        let query = format!(
            "UPDATE chat_sessions SET status = $2 WHERE id = $1 RETURNING {SESSION_COLUMNS}"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Sessions that are not closed, most recent activity first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ChatSession>, sqlx::Error> {
        let query = format!(
            "SELECT {SESSION_COLUMNS} FROM chat_sessions \
             WHERE status <> $1 \
             ORDER BY last_message_at DESC"
        );
        sqlx::query_as::<_, ChatSession>(&query)
            .bind(SessionStatus::Closed.as_str())
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Messages
    // -----------------------------------------------------------------------

    /// Append a message and stamp the session's `last_message_at` with the
    /// message timestamp. Returns `None` if the session does not exist.
    pub async fn append_message(
        pool: &PgPool,
        session_id: DbId,
        sender: Sender,
        body: &str,
        options: Option<&Vec<String>>,
    ) -> Result<Option<ChatMessage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM chat_sessions WHERE id = $1 FOR UPDATE")
                .bind(session_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO chat_messages (session_id, sender, body, options) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MESSAGE_COLUMNS}"
        );
        let message = sqlx::query_as::<_, ChatMessage>(&query)
            .bind(session_id)
            .bind(sender.as_str())
            .bind(body)
            .bind(options)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE chat_sessions SET last_message_at = $2 WHERE id = $1")
            .bind(session_id)
            .bind(message.created_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(message))
    }

    /// All messages of a session in creation order.
    pub async fn list_messages(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {MESSAGE_COLUMNS} FROM chat_messages WHERE session_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }
}
