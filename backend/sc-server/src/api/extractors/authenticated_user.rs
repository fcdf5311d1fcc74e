//! Axum extractor guarding authenticated routes

use crate::{ApiError, AppState};

use sc_auth::bearer_token;
use sc_core::Identity;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified identity of the caller
///
/// Reads `Authorization: Bearer <jwt>` and validates it with the configured
/// [`sc_auth::JwtValidator`]. Any failure rejects the request with 401
/// before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let identity = state.jwt_validator.verify(token)?;

            log::debug!(
                "Authenticated {} (role: {})",
                identity.id,
                identity.role.as_str()
            );

            Ok(AuthenticatedUser(identity))
        }
    }
}
