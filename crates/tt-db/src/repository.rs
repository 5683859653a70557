//! Repository contract consumed by the ticket services
//!
//! The services treat persistence as an external collaborator: reads are
//! parameterized by which related user sets must be populated, and writes
//! are full-entity saves. There is no optimistic-concurrency token, so
//! concurrent updates to the same ticket resolve last-write-wins at the
//! granularity of a save.

use async_trait::async_trait;
use tt_core::traits::Id;
use tt_models::{Project, Ticket, User};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Row decode error: {0}")]
    Decode(String),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for tt_core::error::TicketError {
    /// Any repository failure during a ticket operation surfaces as the
    /// generic fault kind; callers that need a missing-entity outcome test
    /// the `Option` the read methods return instead.
    fn from(err: RepositoryError) -> Self {
        tt_core::error::TicketError::Fault(err.to_string())
    }
}

/// Which related user sets to populate when loading a ticket.
///
/// Explicit replacement for an eager object-graph loader: each call states
/// exactly the collections it is going to inspect or synchronize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketInclude {
    pub owners: bool,
    pub watchers: bool,
}

impl TicketInclude {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn owners() -> Self {
        Self {
            owners: true,
            watchers: false,
        }
    }

    pub fn watchers() -> Self {
        Self {
            owners: false,
            watchers: true,
        }
    }

    pub fn all() -> Self {
        Self {
            owners: true,
            watchers: true,
        }
    }
}

/// Data access contract for the ticket services.
///
/// Users returned inside related sets (developers, owners, watchers) are
/// loaded without role memberships; roles are only populated by the two
/// direct user lookups.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Load a project with its developer set populated
    async fn project_with_developers(&self, id: Id) -> RepositoryResult<Option<Project>>;

    /// Load a ticket, populating the related sets named by `include`
    async fn ticket(&self, id: Id, include: TicketInclude) -> RepositoryResult<Option<Ticket>>;

    /// Look up a user by primary key, with role memberships
    async fn user_by_id(&self, id: Id) -> RepositoryResult<Option<User>>;

    /// Look up a user by login name, with role memberships
    async fn user_by_login(&self, login: &str) -> RepositoryResult<Option<User>>;

    /// Persist a new ticket together with its owner set; returns the
    /// stored ticket with its generated id
    async fn add_ticket(&self, ticket: Ticket) -> RepositoryResult<Ticket>;

    /// Save a ticket row and synchronize the related sets named by
    /// `include` from the entity's in-memory collections. Sets that were
    /// not loaded must not be named here, or they will be emptied.
    async fn update_ticket(&self, ticket: &Ticket, include: TicketInclude)
        -> RepositoryResult<()>;
}
