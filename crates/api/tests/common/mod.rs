//! Shared helpers for HTTP-level integration tests.
//!
//! Tests send requests straight to the router via `tower::ServiceExt`,
//! exercising the same middleware stack production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use maris_api::auth::jwt::{generate_token, JwtConfig};
use maris_api::chat;
use maris_api::config::ServerConfig;
use maris_api::router::build_app_router;
use maris_api::state::AppState;
use maris_core::admin::AdminPolicy;

/// The one email on the test allow-list.
pub const ADMIN_EMAIL: &str = "admin@maris.example";

/// An authenticated identity that is not an admin.
pub const VISITOR_EMAIL: &str = "visitor@maris.example";

const TEST_JWT_SECRET: &str = "test-secret-do-not-use";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin: AdminPolicy::from_csv(ADMIN_EMAIL),
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_mins: 5,
        },
    }
}

/// Build the full application router with all middleware layers and a live
/// chat responder, using the given database pool.
///
/// No object store is configured, so image resolution exercises the
/// literal-URL and default tiers.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let (bot_tx, bot_rx) = mpsc::unbounded_channel();
    // Detached: the task ends with the test runtime.
    let _ = chat::responder::spawn(pool.clone(), bot_rx, CancellationToken::new());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: None,
        bot_queue: bot_tx,
    };

    build_app_router(state, &config)
}

/// Mint a token for the allow-listed admin, as the identity provider would.
pub fn admin_token() -> String {
    generate_token("admin-user", ADMIN_EMAIL, &test_config().jwt).unwrap()
}

/// Mint a token for an authenticated non-admin.
pub fn visitor_token() -> String {
    generate_token("visitor-user", VISITOR_EMAIL, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn post_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None, None).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, None, Some(json)).await
}

pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
