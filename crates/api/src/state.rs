use std::sync::Arc;

use tokio::sync::mpsc;

use crate::chat::responder::BotJob;
use crate::config::ServerConfig;
use crate::files::ObjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maris_db::DbPool,
    /// Server configuration (admin allow-list, JWT secret, CORS).
    pub config: Arc<ServerConfig>,
    /// Object store for uploaded images; `None` when unconfigured, in which
    /// case image resolution degrades to literal URLs.
    pub store: Option<Arc<ObjectStore>>,
    /// Queue feeding the chat responder task.
    pub bot_queue: mpsc::UnboundedSender<BotJob>,
}
