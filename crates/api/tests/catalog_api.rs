//! HTTP-level tests for the public catalog: products, categories, blog,
//! events, and the image URL fallback in responses.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get, post_json, post_json_auth, put_json_auth,
    visitor_token,
};
use maris_core::media::DEFAULT_IMAGE_URL;
use sqlx::PgPool;

fn product_body(name: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "category": category,
        "description": "Radar banda X para embarcações de pesca",
        "specs": ["25 kW", "72 nm"],
    })
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn product_create_is_admin_gated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    let response = post_json(&app, "/api/v1/products", product_body("Radar X1", "Radar")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json_auth(
        &app,
        "/api/v1/products",
        &visitor_token(),
        product_body("Radar X1", "Radar"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response =
        post_json_auth(&app, "/api/v1/products", &admin, product_body("Radar X1", "Radar")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Radar X1");
    assert_eq!(json["status"], "available");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_reads_are_public(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    let created = body_json(
        post_json_auth(&app, "/api/v1/products", &admin, product_body("Sonar S2", "Sonar")).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = get(&app, &format!("/api/v1/products/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Sonar S2");

    let response = get(&app, "/api/v1/products/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_list_filters_by_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    for (name, category) in [("Radar X1", "Radar"), ("Radar X2", "Radar"), ("Sonar S2", "Sonar")] {
        post_json_auth(&app, "/api/v1/products", &admin, product_body(name, category)).await;
    }

    let json = body_json(get(&app, "/api/v1/products?category=Radar").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|p| p["category"] == "Radar"));

    let json = body_json(get(&app, "/api/v1/products").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_image_url_falls_back(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    // No stored file, no literal URL: fixed default.
    let json = body_json(
        post_json_auth(&app, "/api/v1/products", &admin, product_body("Radar X1", "Radar")).await,
    )
    .await;
    assert_eq!(json["image_url"], DEFAULT_IMAGE_URL);

    // No stored file, literal URL set: the literal URL.
    let mut body = product_body("Radar X2", "Radar");
    body["image_url"] = serde_json::json!("https://cdn.maris.example/radar-x2.jpg");
    let json = body_json(post_json_auth(&app, "/api/v1/products", &admin, body).await).await;
    assert_eq!(json["image_url"], "https://cdn.maris.example/radar-x2.jpg");

    // Stored file present but no object store configured: resolution
    // yields nothing, degrades to the literal URL.
    let mut body = product_body("Radar X3", "Radar");
    body["image_key"] = serde_json::json!("uploads/lost-key");
    body["image_url"] = serde_json::json!("https://cdn.maris.example/radar-x3.jpg");
    let json = body_json(post_json_auth(&app, "/api/v1/products", &admin, body).await).await;
    assert_eq!(json["image_url"], "https://cdn.maris.example/radar-x3.jpg");

    // Stored file present, no literal URL, resolution yields nothing: default.
    let mut body = product_body("Radar X4", "Radar");
    body["image_key"] = serde_json::json!("uploads/lost-key");
    let json = body_json(post_json_auth(&app, "/api/v1/products", &admin, body).await).await;
    assert_eq!(json["image_url"], DEFAULT_IMAGE_URL);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_update_and_delete_on_missing_id_are_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    let response = put_json_auth(
        &app,
        "/api/v1/products/424242",
        &admin,
        serde_json::json!({"name": "Novo nome"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(&app, "/api/v1/products/424242", &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn category_list_filters_by_kind(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    for (name, kind) in [("Radar", "product"), ("Notícias", "blog"), ("Feiras", "event")] {
        let response = post_json_auth(
            &app,
            "/api/v1/categories",
            &admin,
            serde_json::json!({"name": name, "slug": name.to_lowercase(), "kind": kind}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(&app, "/api/v1/categories?kind=product").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Radar");

    let json = body_json(get(&app, "/api/v1/categories").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

fn post_body(title: &str, slug: &str, category: &str, published_at: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "slug": slug,
        "excerpt": "Resumo",
        "content": "<p>Conteúdo completo</p>",
        "author": "Equipa Maris",
        "published_at": published_at,
        "category": category,
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blog_slug_lookup_and_related(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    for (title, slug, category, published) in [
        ("Manutenção de radares", "manutencao-radares", "Tecnologia", "2025-03-01T10:00:00Z"),
        ("Novos sonares", "novos-sonares", "Tecnologia", "2025-04-01T10:00:00Z"),
        ("Feira naval", "feira-naval", "Empresa", "2025-05-01T10:00:00Z"),
    ] {
        let response = post_json_auth(
            &app,
            "/api/v1/blog",
            &admin,
            post_body(title, slug, category, published),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(&app, "/api/v1/blog/manutencao-radares").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Manutenção de radares");
    assert_eq!(json["read_time_mins"], 5);

    let response = get(&app, "/api/v1/blog/nao-existe").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Related: same category, excluding the post being read.
    let json = body_json(
        get(&app, "/api/v1/blog/related?category=Tecnologia&exclude=manutencao-radares").await,
    )
    .await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "novos-sonares");

    // List is newest publication first.
    let json = body_json(get(&app, "/api/v1/blog").await).await;
    let slugs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["feira-naval", "novos-sonares", "manutencao-radares"]);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn event_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let admin = admin_token();

    let response = post_json_auth(
        &app,
        "/api/v1/events",
        &admin,
        serde_json::json!({
            "title": "Feira Naval de Namibe",
            "description": "Exposição anual de equipamento marítimo",
            "starts_on": "2025-09-12",
            "starts_at": "09:00",
            "location": "Namibe",
            "kind": "feira",
            "featured": true,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["featured"], true);

    let json = body_json(get(&app, &format!("/api/v1/events/{id}")).await).await;
    assert_eq!(json["title"], "Feira Naval de Namibe");
    assert_eq!(json["image_url"], DEFAULT_IMAGE_URL);

    let response = put_json_auth(
        &app,
        &format!("/api/v1/events/{id}"),
        &admin,
        serde_json::json!({"location": "Luanda"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["location"], "Luanda");

    let response = delete_auth(&app, &format!("/api/v1/events/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/events/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
