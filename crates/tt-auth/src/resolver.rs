//! Principal resolution
//!
//! Maps an inbound session token to the [`Principal`] that is then passed
//! explicitly into the ticket services.

use async_trait::async_trait;
use std::sync::Arc;
use tt_db::{RepositoryError, TicketRepository};

use crate::principal::Principal;
use crate::session::SessionStore;

/// Resolves the current request's caller.
///
/// Returns `Ok(None)` when no valid session exists or the session's user no
/// longer does; repository faults propagate.
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn resolve(&self, session_id: &str) -> Result<Option<Principal>, RepositoryError>;
}

/// Session-backed principal resolver: session token → user id → user row
/// with role memberships.
pub struct SessionPrincipalResolver {
    store: Arc<dyn SessionStore>,
    repo: Arc<dyn TicketRepository>,
}

impl SessionPrincipalResolver {
    pub fn new(store: Arc<dyn SessionStore>, repo: Arc<dyn TicketRepository>) -> Self {
        Self { store, repo }
    }
}

#[async_trait]
impl PrincipalResolver for SessionPrincipalResolver {
    async fn resolve(&self, session_id: &str) -> Result<Option<Principal>, RepositoryError> {
        let session = match self.store.get(session_id) {
            Some(session) => session,
            None => return Ok(None),
        };

        let user = match self.repo.user_by_id(session.user_id).await? {
            Some(user) => user,
            None => {
                tracing::warn!(
                    user_id = session.user_id,
                    "session references a missing user"
                );
                return Ok(None);
            }
        };

        Ok(Some(Principal::new(user)))
    }
}
