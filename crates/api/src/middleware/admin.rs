//! The admin gate.
//!
//! Every privileged operation takes [`RequireAdmin`] in its handler
//! signature, so the check runs before the handler body and cannot be
//! forgotten per store. Rejections fail closed: a protected query never
//! degrades to an empty result.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use maris_core::error::{CoreError, MSG_RESTRICTED};

use super::auth::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an identity on the admin allow-list.
///
/// Rejects with 401 when no identity resolves, 403 when the identity is not
/// an admin. There is no other outcome.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(identity): RequireAdmin) -> AppResult<Json<()>> {
///     // identity is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Identity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;
        if !state.config.admin.is_admin(&identity.email) {
            return Err(AppError::Core(CoreError::Forbidden(MSG_RESTRICTED.into())));
        }
        Ok(RequireAdmin(identity))
    }
}
