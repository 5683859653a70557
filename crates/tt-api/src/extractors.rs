//! Shared application state and request extractors.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use tt_auth::{extract_session_id, Principal, PrincipalResolver};
use tt_core::config::AppConfig;
use tt_db::TicketRepository;

use crate::error::ApiError;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn TicketRepository>,
    pub resolver: Arc<dyn PrincipalResolver>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        repo: Arc<dyn TicketRepository>,
        resolver: Arc<dyn PrincipalResolver>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            repo,
            resolver,
        }
    }
}

/// The authenticated caller, resolved from the session cookie.
///
/// Rejects with 401 when the cookie is absent, the session is invalid or
/// expired, or the session's user no longer exists. Authorization beyond
/// "is logged in" stays with the services.
pub struct AuthenticatedPrincipal(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedPrincipal
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let session_id = parts
            .headers
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| extract_session_id(header, &state.config.auth.session_cookie))
            .ok_or_else(|| ApiError::unauthorized("Authentication is required"))?;

        let principal = state
            .resolver
            .resolve(&session_id)
            .await
            .map_err(|err| ApiError::internal(err.to_string()))?
            .ok_or_else(|| ApiError::unauthorized("Authentication is required"))?;

        Ok(Self(principal))
    }
}

impl std::ops::Deref for AuthenticatedPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
