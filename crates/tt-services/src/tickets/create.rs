//! Create service for tickets

use tt_auth::Principal;
use tt_core::error::TicketError;
use tt_core::traits::Id;
use tt_db::TicketRepository;
use tt_models::Ticket;

use crate::result::{Navigation, ServiceResult, ServiceSuccess};
use super::TicketParams;

/// Service for creating tickets
///
/// The Project Manager role gate is composed by the caller before this
/// service runs; the service itself validates the owner list and the
/// project reference.
///
/// # Example
/// ```ignore
/// let result = CreateTicketService::new(&repo, &principal)
///     .call(project_id, TicketParams::new().with_name("Fix bug").with_hours(5), &[dev_id])
///     .await;
/// ```
pub struct CreateTicketService<'a, R: TicketRepository + ?Sized> {
    repo: &'a R,
    principal: &'a Principal,
}

impl<'a, R: TicketRepository + ?Sized> CreateTicketService<'a, R> {
    pub fn new(repo: &'a R, principal: &'a Principal) -> Self {
        Self { repo, principal }
    }

    /// Execute the create operation.
    ///
    /// An empty owner list aborts before anything is constructed and sends
    /// the caller back to the creation entry. Unresolvable owner ids abort
    /// the whole creation; there is no partial assignment.
    pub async fn call(
        self,
        project_id: Id,
        params: TicketParams,
        owner_ids: &[Id],
    ) -> ServiceResult<Ticket> {
        if owner_ids.is_empty() {
            return Err(TicketError::re_prompt(
                "at least one task owner must be assigned",
            ));
        }

        if self
            .repo
            .project_with_developers(project_id)
            .await?
            .is_none()
        {
            return Err(TicketError::not_found("Project", project_id));
        }

        // Completed is forced to false regardless of any caller-supplied
        // value.
        let mut ticket = Ticket::new(
            project_id,
            params.name.unwrap_or_default(),
            params.hours.unwrap_or_default(),
        )
        .with_priority(params.priority.unwrap_or_default());

        for owner_id in owner_ids {
            let owner = self.repo.user_by_id(*owner_id).await?.ok_or_else(|| {
                TicketError::bad_input(format!("Unknown task owner id {}", owner_id))
            })?;
            ticket.add_owner(owner);
        }

        let stored = self.repo.add_ticket(ticket).await?;

        tracing::debug!(
            login = self.principal.login(),
            project_id,
            ticket_id = stored.id,
            "ticket created"
        );

        Ok(ServiceSuccess::new(stored).navigating_to(Navigation::ProjectIndex))
    }
}
