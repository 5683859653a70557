//! # tt-models
//!
//! Domain models for TicketTrack RS: projects, tickets, users, the
//! priority enumeration, and role names.

pub mod priority;
pub mod project;
pub mod role;
pub mod ticket;
pub mod user;

pub use priority::Priority;
pub use project::Project;
pub use ticket::{Ticket, WatchToggle};
pub use user::User;
