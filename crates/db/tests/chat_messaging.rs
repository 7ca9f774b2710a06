//! Repository-level tests for chat messaging: append-only ordering and
//! session activity stamping.

use maris_db::models::chat::{CreateChatSession, Sender, SessionStatus};
use maris_db::repositories::ChatRepo;
use sqlx::PgPool;

async fn open_session(pool: &PgPool) -> i64 {
    ChatRepo::create_session(
        pool,
        &CreateChatSession {
            user_name: Some("Visitante".to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test]
async fn new_session_starts_in_bot_state(pool: PgPool) {
    let id = open_session(&pool).await;
    let session = ChatRepo::find_session(&pool, id).await.unwrap().unwrap();
    assert_eq!(session.status, "bot");
}

#[sqlx::test]
async fn messages_come_back_in_creation_order(pool: PgPool) {
    let id = open_session(&pool).await;

    for (sender, body) in [
        (Sender::User, "olá"),
        (Sender::Bot, "Olá! Como posso ajudar?"),
        (Sender::User, "quero um orçamento"),
        (Sender::Admin, "Bom dia, trato disso já."),
    ] {
        ChatRepo::append_message(&pool, id, sender, body, None)
            .await
            .unwrap()
            .expect("session exists");
    }

    let messages = ChatRepo::list_messages(&pool, id).await.unwrap();
    let senders: Vec<&str> = messages.iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(senders, ["user", "bot", "user", "admin"]);
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
async fn last_message_at_tracks_the_latest_append(pool: PgPool) {
    let id = open_session(&pool).await;

    let mut last = None;
    for n in 0..3 {
        let message = ChatRepo::append_message(&pool, id, Sender::User, &format!("msg {n}"), None)
            .await
            .unwrap()
            .expect("session exists");
        last = Some(message.created_at);
    }

    let session = ChatRepo::find_session(&pool, id).await.unwrap().unwrap();
    assert_eq!(session.last_message_at, last.unwrap());
}

#[sqlx::test]
async fn append_to_unknown_session_returns_none(pool: PgPool) {
    let appended = ChatRepo::append_message(&pool, 999_999, Sender::User, "eco?", None)
        .await
        .unwrap();
    assert!(appended.is_none());
}

#[sqlx::test]
async fn active_sessions_exclude_closed_and_order_by_activity(pool: PgPool) {
    let older = open_session(&pool).await;
    let newer = open_session(&pool).await;
    let closed = open_session(&pool).await;

    ChatRepo::append_message(&pool, older, Sender::User, "primeiro", None)
        .await
        .unwrap();
    ChatRepo::append_message(&pool, newer, Sender::User, "segundo", None)
        .await
        .unwrap();
    ChatRepo::set_status(&pool, closed, SessionStatus::Closed)
        .await
        .unwrap();

    let active = ChatRepo::list_active(&pool).await.unwrap();
    let ids: Vec<i64> = active.iter().map(|s| s.id).collect();
    assert!(!ids.contains(&closed));
    let pos_newer = ids.iter().position(|&i| i == newer).unwrap();
    let pos_older = ids.iter().position(|&i| i == older).unwrap();
    assert!(pos_newer < pos_older, "most recent activity first");
}

#[sqlx::test]
async fn status_updates_are_idempotent(pool: PgPool) {
    let id = open_session(&pool).await;

    let first = ChatRepo::set_status(&pool, id, SessionStatus::Human)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.status, "human");

    let again = ChatRepo::set_status(&pool, id, SessionStatus::Human)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.status, "human");
}
