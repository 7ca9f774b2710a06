//! Handler for presigned image upload URLs.

use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::files::UploadTicket;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// POST /api/v1/admin/uploads
///
/// Issues a presigned PUT URL; the caller stores the returned `key` on the
/// record once the upload completes.
pub async fn generate_upload_url(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<UploadTicket>> {
    let store = state
        .store
        .as_deref()
        .ok_or_else(|| AppError::InternalError("object storage is not configured".into()))?;
    let ticket = store.presign_upload().await?;
    Ok(Json(ticket))
}
