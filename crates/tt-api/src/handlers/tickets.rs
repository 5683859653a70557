//! Ticket endpoints.
//!
//! Each handler resolves the caller, delegates to the matching service,
//! and turns the outcome into a redirect or an error response. The three
//! mutations route their failures through
//! [`collapse_mutation_error`](crate::error::collapse_mutation_error);
//! creation keeps the full error surface.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tt_auth::require_role;
use tt_core::error::TicketError;
use tt_core::traits::Id;
use tt_models::{role, Priority};
use tt_services::{
    ChangeHoursService, CreateTicketService, Navigation, TicketParams, ToggleTicketService,
    ToggleWatchService,
};

use crate::error::{collapse_mutation_error, ApiResult};
use crate::extractors::{AppState, AuthenticatedPrincipal};
use crate::handlers::see_other;

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub name: Option<String>,
    pub hours: Option<i32>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    #[serde(default)]
    pub task_owner_ids: Vec<Id>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeHoursRequest {
    pub hours: i32,
}

/// `POST /projects/:project_id/tickets`
///
/// Project-manager only. An empty owner list sends the caller back to the
/// creation form instead of erroring.
pub async fn create_ticket(
    State(state): State<AppState>,
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    Path(project_id): Path<Id>,
    Json(request): Json<CreateTicketRequest>,
) -> ApiResult<Response> {
    require_role(&principal, role::PROJECT_MANAGER)?;

    let mut params = TicketParams::new();
    if let Some(name) = request.name {
        params = params.with_name(name);
    }
    if let Some(hours) = request.hours {
        params = params.with_hours(hours);
    }
    if let Some(priority) = request.priority {
        params = params.with_priority(priority);
    }
    if let Some(completed) = request.completed {
        params = params.with_completed(completed);
    }

    let outcome = CreateTicketService::new(state.repo.as_ref(), &principal)
        .call(project_id, params, &request.task_owner_ids)
        .await;

    match outcome {
        Ok(success) => Ok(see_other(
            success.navigate_to.unwrap_or(Navigation::ProjectIndex),
        )),
        Err(TicketError::RePrompt { reason }) => {
            tracing::debug!(project_id, %reason, "re-prompting ticket creation");
            Ok(see_other(Navigation::TicketCreate(project_id)))
        }
        Err(err) => Err(err.into()),
    }
}

/// `POST /projects/:project_id/tickets/:ticket_id/toggle`
pub async fn toggle_complete(
    State(state): State<AppState>,
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    Path((project_id, ticket_id)): Path<(Id, Id)>,
) -> ApiResult<Response> {
    let success = ToggleTicketService::new(state.repo.as_ref(), &principal)
        .call(project_id, ticket_id)
        .await
        .map_err(collapse_mutation_error)?;

    Ok(see_other(
        success
            .navigate_to
            .unwrap_or(Navigation::ProjectDetails(project_id)),
    ))
}

/// `POST /projects/:project_id/tickets/:ticket_id/hours`
pub async fn change_hours(
    State(state): State<AppState>,
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    Path((project_id, ticket_id)): Path<(Id, Id)>,
    Json(request): Json<ChangeHoursRequest>,
) -> ApiResult<Response> {
    let success = ChangeHoursService::new(state.repo.as_ref(), &principal)
        .call(project_id, ticket_id, request.hours)
        .await
        .map_err(collapse_mutation_error)?;

    Ok(see_other(
        success
            .navigate_to
            .unwrap_or(Navigation::ProjectDetails(project_id)),
    ))
}

/// `POST /projects/:project_id/tickets/:ticket_id/watch`
pub async fn toggle_watch(
    State(state): State<AppState>,
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    Path((project_id, ticket_id)): Path<(Id, Id)>,
) -> ApiResult<Response> {
    let success = ToggleWatchService::new(state.repo.as_ref(), &principal)
        .call(project_id, ticket_id)
        .await
        .map_err(collapse_mutation_error)?;

    Ok(see_other(
        success
            .navigate_to
            .unwrap_or(Navigation::ProjectDetails(project_id)),
    ))
}
