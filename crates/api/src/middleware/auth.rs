//! Identity extractors for Axum handlers.
//!
//! Identity is resolved from a Bearer token in the `Authorization` header,
//! validated against the shared secret of the external identity provider.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use maris_core::error::{CoreError, MSG_NOT_AUTHENTICATED};

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity extracted from a JWT Bearer token.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Rejection carries the fixed public message so the UI can
/// route the caller to login.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The email claim, the sole authorization input.
    pub email: String,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(MSG_NOT_AUTHENTICATED.into()))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(MSG_NOT_AUTHENTICATED.into()))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized(MSG_NOT_AUTHENTICATED.into()))
        })?;

        Ok(Identity {
            email: claims.email,
        })
    }
}

/// Identity resolution that never rejects.
///
/// Yields `None` both when no credentials are presented and when they are
/// malformed, for endpoints where authentication is optional. Callers that
/// need the distinction must use [`Identity`] directly.
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for OptionalIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(
            Identity::from_request_parts(parts, state).await.ok(),
        ))
    }
}
