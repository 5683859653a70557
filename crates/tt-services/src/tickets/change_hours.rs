//! Required-hours change service for tickets

use tt_auth::Principal;
use tt_core::error::TicketError;
use tt_core::traits::Id;
use tt_db::{TicketInclude, TicketRepository};
use tt_models::Ticket;

use crate::result::{Navigation, ServiceResult, ServiceSuccess};
use super::authorize;

/// Service for overwriting a ticket's required-hours estimate
///
/// Only a task owner may change the estimate. The new value is stored
/// as supplied; there is no bounds check, so zero and negative estimates
/// are accepted.
pub struct ChangeHoursService<'a, R: TicketRepository + ?Sized> {
    repo: &'a R,
    principal: &'a Principal,
}

impl<'a, R: TicketRepository + ?Sized> ChangeHoursService<'a, R> {
    pub fn new(repo: &'a R, principal: &'a Principal) -> Self {
        Self { repo, principal }
    }

    pub async fn call(self, project_id: Id, ticket_id: Id, hours: i32) -> ServiceResult<Ticket> {
        let mut ticket = self
            .repo
            .ticket(ticket_id, TicketInclude::owners())
            .await?
            .ok_or_else(|| TicketError::not_found("Ticket", ticket_id))?;

        authorize::require_task_owner(self.principal, &ticket, authorize::CHANGE_HOURS_DENIED)?;

        ticket.hours = hours;
        self.repo
            .update_ticket(&ticket, TicketInclude::none())
            .await?;

        tracing::debug!(
            login = self.principal.login(),
            ticket_id,
            hours,
            "required hours changed"
        );

        Ok(ServiceSuccess::new(ticket).navigating_to(Navigation::ProjectDetails(project_id)))
    }
}
