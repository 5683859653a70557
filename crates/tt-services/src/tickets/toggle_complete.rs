//! Completion-toggle service for tickets

use tt_auth::Principal;
use tt_core::error::TicketError;
use tt_core::traits::Id;
use tt_db::{TicketInclude, TicketRepository};
use tt_models::Ticket;

use crate::result::{Navigation, ServiceResult, ServiceSuccess};
use super::authorize;

/// Service for flipping a ticket's completion flag
///
/// Only a task owner of the ticket may toggle it. The project id is used
/// for post-operation navigation only, never for authorization.
pub struct ToggleTicketService<'a, R: TicketRepository + ?Sized> {
    repo: &'a R,
    principal: &'a Principal,
}

impl<'a, R: TicketRepository + ?Sized> ToggleTicketService<'a, R> {
    pub fn new(repo: &'a R, principal: &'a Principal) -> Self {
        Self { repo, principal }
    }

    /// Execute the toggle. Calling twice restores the original value.
    pub async fn call(self, project_id: Id, ticket_id: Id) -> ServiceResult<Ticket> {
        let mut ticket = self
            .repo
            .ticket(ticket_id, TicketInclude::owners())
            .await?
            .ok_or_else(|| TicketError::not_found("Ticket", ticket_id))?;

        authorize::require_task_owner(
            self.principal,
            &ticket,
            authorize::TOGGLE_COMPLETE_DENIED,
        )?;

        ticket.toggle_completed();
        self.repo
            .update_ticket(&ticket, TicketInclude::none())
            .await?;

        tracing::debug!(
            login = self.principal.login(),
            ticket_id,
            completed = ticket.completed,
            "ticket completion toggled"
        );

        Ok(ServiceSuccess::new(ticket).navigating_to(Navigation::ProjectDetails(project_id)))
    }
}
