//! Core error types for TicketTrack RS
//!
//! The ticket operations surface a small, closed set of outcomes: a
//! validation short-circuit (re-prompt), missing entities, failed
//! authorization predicates, unresolvable input, and a generic fault for
//! anything unexpected during a mutation.

use thiserror::Error;

/// Error type for all ticket operations.
///
/// The kinds stay distinguishable here; the request-handler layer decides
/// which of them collapse into a single client-visible response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// Validation short-circuit, not a fault: the caller must be sent back
    /// to the ticket-creation entry (e.g. an empty task-owner list).
    #[error("Input incomplete: {reason}")]
    RePrompt { reason: String },

    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Bad input: {message}")]
    BadInput { message: String },

    /// Any unexpected failure during a ticket mutation (repository fault,
    /// concurrently deleted row). Exposed to clients as a generic failure.
    #[error("Operation failed: {0}")]
    Fault(String),
}

impl TicketError {
    pub fn re_prompt(reason: impl Into<String>) -> Self {
        Self::RePrompt {
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput {
            message: message.into(),
        }
    }

    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(message.into())
    }

    /// Default HTTP status for each kind. Mutation handlers additionally
    /// collapse `NotFound` into the same 400 as `Fault`.
    pub fn status_code(&self) -> u16 {
        match self {
            TicketError::RePrompt { .. } => 303,
            TicketError::NotFound { .. } => 404,
            TicketError::Unauthorized { .. } => 401,
            TicketError::BadInput { .. } => 400,
            TicketError::Fault(_) => 400,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TicketError::RePrompt { .. } => "re_prompt",
            TicketError::NotFound { .. } => "not_found",
            TicketError::Unauthorized { .. } => "unauthorized",
            TicketError::BadInput { .. } => "bad_input",
            TicketError::Fault(_) => "fault",
        }
    }
}
