//! # tt-api
//!
//! Thin HTTP layer for TicketTrack RS: resolves the caller's principal,
//! dispatches to the ticket services, and translates service outcomes to
//! redirects and status codes. All business rules live in `tt-services`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use extractors::AppState;
pub use routes::router;
