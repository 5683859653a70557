//! # tt-services
//!
//! Business logic for TicketTrack RS: ticket creation and the three
//! authorization-gated mutations (completion toggle, required-hours
//! change, watch toggle).
//!
//! Every service takes the resolved [`tt_auth::Principal`] explicitly and
//! re-evaluates its authorization predicate against freshly loaded rows on
//! each call.

pub mod result;
pub mod tickets;

pub use result::{Navigation, ServiceResult, ServiceSuccess};
pub use tickets::{
    ChangeHoursService, CreateTicketService, TicketParams, ToggleTicketService,
    ToggleWatchService, WatchChange,
};

#[cfg(test)]
pub(crate) mod test_support;
