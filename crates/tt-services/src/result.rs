//! Service outcome types
//!
//! A service call either succeeds, carrying its result and an optional
//! navigation target for the caller, or fails with one of the
//! [`TicketError`] kinds. The kinds stay distinguishable here; collapsing
//! for the client happens at the transport boundary.

use tt_core::error::TicketError;
use tt_core::traits::Id;

/// Where the caller should be sent after a successful operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The project listing
    ProjectIndex,
    /// A project's detail page
    ProjectDetails(Id),
    /// The ticket-creation entry for a project
    TicketCreate(Id),
}

/// Successful service outcome
#[derive(Debug, Clone)]
pub struct ServiceSuccess<T> {
    pub result: T,
    pub navigate_to: Option<Navigation>,
}

impl<T> ServiceSuccess<T> {
    pub fn new(result: T) -> Self {
        Self {
            result,
            navigate_to: None,
        }
    }

    pub fn navigating_to(mut self, target: Navigation) -> Self {
        self.navigate_to = Some(target);
        self
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ServiceSuccess<U> {
        ServiceSuccess {
            result: f(self.result),
            navigate_to: self.navigate_to,
        }
    }
}

/// Result of a service call
pub type ServiceResult<T> = Result<ServiceSuccess<T>, TicketError>;
