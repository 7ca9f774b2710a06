//! Chat session and message models and DTOs.

use maris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Chat session states. `closed` is terminal in intent; the transitions
/// themselves are open (any caller may close or request a human at any
/// point, both idempotent in effect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Bot,
    Human,
    Closed,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::Human => "human",
            Self::Closed => "closed",
        }
    }
}

/// Message sender roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    Admin,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::Admin => "admin",
        }
    }
}

/// A row from the `chat_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatSession {
    pub id: DbId,
    pub status: String,
    pub user_name: Option<String>,
    pub last_message_at: Timestamp,
    pub created_at: Timestamp,
}

/// A row from the `chat_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub session_id: DbId,
    pub sender: String,
    pub body: String,
    /// Quick-reply option strings rendered as buttons by the widget.
    pub options: Option<Vec<String>>,
    pub created_at: Timestamp,
}

/// DTO for opening a new chat session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatSession {
    pub user_name: Option<String>,
}

/// DTO for posting a message into a session.
#[derive(Debug, Clone, Deserialize)]
pub struct PostChatMessage {
    pub sender: Sender,
    pub body: String,
    pub options: Option<Vec<String>>,
}
