//! Result type aliases

use crate::error::TicketError;

/// Standard Result type for ticket operations
pub type CoreResult<T> = Result<T, TicketError>;
