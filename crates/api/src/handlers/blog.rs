//! Handlers for the `/blog` resource.
//!
//! Public lookups are by slug; back-office updates and deletes are by id.
//! Slug uniqueness is a convention, so lookups take the first match.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use maris_core::error::CoreError;
use maris_core::types::DbId;
use maris_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use maris_db::repositories::BlogPostRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::files::resolve_image;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /blog/related`.
#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    pub category: String,
    /// Slug of the post being read, excluded from the result.
    pub exclude: String,
}

async fn with_resolved_image(state: &AppState, mut post: BlogPost) -> BlogPost {
    let resolved = resolve_image(
        state.store.as_deref(),
        post.image_key.as_deref(),
        post.image_url.as_deref(),
    )
    .await;
    post.image_url = Some(resolved);
    post
}

/// GET /api/v1/blog
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    let mut resolved = Vec::with_capacity(posts.len());
    for post in posts {
        resolved.push(with_resolved_image(&state, post).await);
    }
    Ok(Json(resolved))
}

/// GET /api/v1/blog/related?category=...&exclude=...
pub async fn related(
    State(state): State<AppState>,
    Query(params): Query<RelatedParams>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list_related(&state.pool, &params.category, &params.exclude).await?;
    let mut resolved = Vec::with_capacity(posts.len());
    for post in posts {
        resolved.push(with_resolved_image(&state, post).await);
    }
    Ok(Json(resolved))
}

/// GET /api/v1/blog/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("BlogPost", &slug)))?;
    Ok(Json(with_resolved_image(&state, post).await))
}

/// POST /api/v1/blog
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let post = BlogPostRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(with_resolved_image(&state, post).await),
    ))
}

/// PUT /api/v1/blog/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("BlogPost", id)))?;
    Ok(Json(with_resolved_image(&state, post).await))
}

/// DELETE /api/v1/blog/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("BlogPost", id)))
    }
}
