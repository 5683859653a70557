//! # tt-auth
//!
//! Principal resolution and authorization for TicketTrack RS.
//!
//! Authentication itself (credentials, registration) lives outside this
//! system; this crate resolves an already-established session into a
//! [`Principal`] and provides the role gate composed in front of ticket
//! creation. The principal is passed explicitly into every service call —
//! business logic never looks up an ambient current user.

pub mod gate;
pub mod principal;
pub mod resolver;
pub mod session;

pub use gate::require_role;
pub use principal::Principal;
pub use resolver::{PrincipalResolver, SessionPrincipalResolver};
pub use session::{extract_session_id, MemorySessionStore, Session, SessionStore};
