//! Handlers for the `/products` resource.
//!
//! Reads are public; writes require the admin gate. Responses always carry
//! a resolved `image_url` (stored file, then literal URL, then default).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use maris_core::error::CoreError;
use maris_core::types::DbId;
use maris_db::models::product::{CreateProduct, Product, UpdateProduct};
use maris_db::repositories::ProductRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::files::resolve_image;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    /// Filter by category label.
    pub category: Option<String>,
}

/// GET /api/v1/products
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let mut products = ProductRepo::list(&state.pool, params.category.as_deref()).await?;
    for product in &mut products {
        let resolved = resolve_image(
            state.store.as_deref(),
            product.image_key.as_deref(),
            product.image_url.as_deref(),
        )
        .await;
        product.image_url = Some(resolved);
    }
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let mut product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Product", id)))?;
    let resolved = resolve_image(
        state.store.as_deref(),
        product.image_key.as_deref(),
        product.image_url.as_deref(),
    )
    .await;
    product.image_url = Some(resolved);
    Ok(Json(product))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let mut product = ProductRepo::create(&state.pool, &input).await?;
    let resolved = resolve_image(
        state.store.as_deref(),
        product.image_key.as_deref(),
        product.image_url.as_deref(),
    )
    .await;
    product.image_url = Some(resolved);
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let mut product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Product", id)))?;
    let resolved = resolve_image(
        state.store.as_deref(),
        product.image_key.as_deref(),
        product.image_url.as_deref(),
    )
    .await;
    product.image_url = Some(resolved);
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Product", id)))
    }
}
