//! Handler for the admin dashboard overview.

use axum::extract::State;
use axum::Json;
use maris_db::repositories::stats_repo::StatsOverview;
use maris_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/stats
pub async fn overview(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<StatsOverview>> {
    let stats = StatsRepo::collect(&state.pool).await?;
    Ok(Json(stats))
}
