//! The chat bot responder.
//!
//! Every user message enqueues a [`BotJob`]; this task classifies the text
//! and appends the canned reply through the internal bot path. Running the
//! reply server-side guarantees the bot answers even when the client
//! disconnects right after posting.

use maris_core::chat_bot;
use maris_core::types::DbId;
use maris_db::models::chat::{Sender, SessionStatus};
use maris_db::repositories::{CategoryRepo, ChatRepo};
use maris_db::DbPool;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A queued reply job: one user message awaiting a bot response.
#[derive(Debug)]
pub struct BotJob {
    pub session_id: DbId,
    pub body: String,
}

/// Spawn the responder task. It drains the queue until cancelled.
pub fn spawn(
    pool: DbPool,
    mut queue: mpsc::UnboundedReceiver<BotJob>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                job = queue.recv() => match job {
                    Some(job) => respond(&pool, job).await,
                    None => break,
                },
            }
        }
        tracing::debug!("chat responder stopped");
    })
}

/// Classify one user message and append the bot reply.
///
/// Failures are logged, not retried; the session stays answerable by a
/// human through the back office.
async fn respond(pool: &DbPool, job: BotJob) {
    let intent = chat_bot::classify(&job.body);

    let categories = match intent {
        chat_bot::Intent::Catalog => match CategoryRepo::product_category_names(pool).await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "category lookup for bot options failed");
                Vec::new()
            }
        },
        _ => Vec::new(),
    };

    let reply = chat_bot::reply_for(intent, &categories);

    if reply.hand_off {
        if let Err(e) = ChatRepo::set_status(pool, job.session_id, SessionStatus::Human).await {
            tracing::error!(session_id = job.session_id, error = %e, "handoff failed");
        }
    }

    match ChatRepo::append_message(
        pool,
        job.session_id,
        Sender::Bot,
        &reply.body,
        reply.options.as_ref(),
    )
    .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::warn!(session_id = job.session_id, "bot reply to a vanished session")
        }
        Err(e) => {
            tracing::error!(session_id = job.session_id, error = %e, "bot reply failed")
        }
    }
}
