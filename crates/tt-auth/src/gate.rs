//! Role-based authorization gate
//!
//! Composed in front of ticket creation, which is gated on role alone.
//! The mutation operations check relational membership inside the service
//! instead, since their authorization depends on the loaded entities.

use tt_core::error::TicketError;
use tt_core::result::CoreResult;

use crate::principal::Principal;

/// Require the principal to hold the named role.
pub fn require_role(principal: &Principal, role: &str) -> CoreResult<()> {
    if principal.has_role(role) {
        Ok(())
    } else {
        tracing::warn!(
            login = principal.login(),
            role,
            "role gate denied request"
        );
        Err(TicketError::unauthorized(format!(
            "The {} role is required to perform this action",
            role
        )))
    }
}
