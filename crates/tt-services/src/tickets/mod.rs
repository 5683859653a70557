//! Ticket services
//!
//! One service object per operation:
//! - [`CreateTicketService`] — create a ticket with its task owners
//! - [`ToggleTicketService`] — flip the completion flag
//! - [`ChangeHoursService`] — overwrite the required-hours estimate
//! - [`ToggleWatchService`] — flip watcher membership

mod authorize;
mod change_hours;
mod create;
mod toggle_complete;
mod toggle_watch;

pub use change_hours::ChangeHoursService;
pub use create::CreateTicketService;
pub use toggle_complete::ToggleTicketService;
pub use toggle_watch::{ToggleWatchService, WatchChange};

use tt_models::Priority;

/// Ticket creation params
///
/// A caller-supplied `completed` value is representable but never honored:
/// creation always stores the ticket as not completed.
#[derive(Debug, Clone, Default)]
pub struct TicketParams {
    pub name: Option<String>,
    pub hours: Option<i32>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TicketParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hours(mut self, hours: i32) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
