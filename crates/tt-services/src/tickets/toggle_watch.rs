//! Watch-toggle service for tickets

use tt_auth::Principal;
use tt_core::error::TicketError;
use tt_core::traits::Id;
use tt_db::{TicketInclude, TicketRepository};
use tt_models::{Ticket, WatchToggle};

use crate::result::{Navigation, ServiceResult, ServiceSuccess};
use super::authorize;

/// Result of a watch toggle: the saved ticket and which way the
/// membership flipped.
#[derive(Debug, Clone)]
pub struct WatchChange {
    pub ticket: Ticket,
    pub toggle: WatchToggle,
}

/// Service for flipping watcher membership on a ticket
///
/// Any developer assigned to the ticket's project may watch or unwatch,
/// independent of task ownership. Membership always flips: absent users
/// are added, present users removed.
pub struct ToggleWatchService<'a, R: TicketRepository + ?Sized> {
    repo: &'a R,
    principal: &'a Principal,
}

impl<'a, R: TicketRepository + ?Sized> ToggleWatchService<'a, R> {
    pub fn new(repo: &'a R, principal: &'a Principal) -> Self {
        Self { repo, principal }
    }

    pub async fn call(self, project_id: Id, ticket_id: Id) -> ServiceResult<WatchChange> {
        let mut ticket = self
            .repo
            .ticket(ticket_id, TicketInclude::watchers())
            .await?
            .ok_or_else(|| TicketError::not_found("Ticket", ticket_id))?;

        // The predicate is evaluated against the ticket's own project.
        let project = self
            .repo
            .project_with_developers(ticket.project_id)
            .await?
            .ok_or_else(|| TicketError::not_found("Project", ticket.project_id))?;

        authorize::require_assigned_developer(self.principal, &project)?;

        let toggle = ticket.toggle_watcher(self.principal.user().clone());
        self.repo
            .update_ticket(&ticket, TicketInclude::watchers())
            .await?;

        tracing::debug!(
            login = self.principal.login(),
            ticket_id,
            added = matches!(toggle, WatchToggle::Added),
            "watch membership toggled"
        );

        Ok(ServiceSuccess::new(WatchChange { ticket, toggle })
            .navigating_to(Navigation::ProjectDetails(project_id)))
    }
}
