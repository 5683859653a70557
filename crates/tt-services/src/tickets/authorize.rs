//! Shared authorization predicates for ticket mutations
//!
//! The denial messages are part of the contract with the client, not
//! incidental wording.

use tt_auth::Principal;
use tt_core::error::TicketError;
use tt_core::result::CoreResult;
use tt_models::{Project, Ticket};

pub const TOGGLE_COMPLETE_DENIED: &str =
    "Only developers who are a task owner of this project can mark a task as complete";

pub const CHANGE_HOURS_DENIED: &str =
    "Only developers who are a task owner of this project can adjust required hours of a task";

pub const WATCH_DENIED: &str = "Only developers assigned to this project can watch the tasks";

/// The principal must be in the ticket's task-owner set.
pub fn require_task_owner(
    principal: &Principal,
    ticket: &Ticket,
    message: &str,
) -> CoreResult<()> {
    if ticket.is_task_owner(principal.id()) {
        Ok(())
    } else {
        tracing::warn!(
            login = principal.login(),
            ticket_id = ticket.id,
            "task-owner predicate denied request"
        );
        Err(TicketError::unauthorized(message))
    }
}

/// The principal must be in the project's developer set.
pub fn require_assigned_developer(principal: &Principal, project: &Project) -> CoreResult<()> {
    if project.has_developer(principal.id()) {
        Ok(())
    } else {
        tracing::warn!(
            login = principal.login(),
            project_id = project.id,
            "assigned-developer predicate denied request"
        );
        Err(TicketError::unauthorized(WATCH_DENIED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_models::User;

    fn user(id: i64) -> User {
        let mut u = User::new(format!("user{}", id));
        u.id = Some(id);
        u
    }

    #[test]
    fn test_task_owner_predicate() {
        let mut ticket = Ticket::new(1, "Fix bug", 5);
        ticket.add_owner(user(1));

        let owner = Principal::new(user(1));
        let outsider = Principal::new(user(2));

        assert!(require_task_owner(&owner, &ticket, TOGGLE_COMPLETE_DENIED).is_ok());

        let err = require_task_owner(&outsider, &ticket, TOGGLE_COMPLETE_DENIED).unwrap_err();
        assert_eq!(
            err,
            TicketError::unauthorized(TOGGLE_COMPLETE_DENIED)
        );
    }

    #[test]
    fn test_assigned_developer_predicate() {
        let mut project = Project::new("p", "P");
        project.add_developer(user(1));

        assert!(require_assigned_developer(&Principal::new(user(1)), &project).is_ok());

        let err =
            require_assigned_developer(&Principal::new(user(2)), &project).unwrap_err();
        assert_eq!(err, TicketError::unauthorized(WATCH_DENIED));
    }
}
