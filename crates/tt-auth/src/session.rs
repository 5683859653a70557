//! Session storage
//!
//! Sessions are established by the identity subsystem; this module only
//! stores and looks up the token-to-user mapping the principal resolver
//! needs.

use std::collections::HashMap;
use thiserror::Error;
use tt_core::traits::Id;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,
    #[error("Session store unavailable")]
    Unavailable,
}

/// Session data
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (opaque token)
    pub id: String,
    /// Authenticated user
    pub user_id: Id,
    /// Creation time
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Expiration time
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// Create an authenticated session
    pub fn authenticated(user_id: Id, lifetime_seconds: i64) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: generate_session_id(),
            user_id,
            created_at: now,
            expires_at: now + chrono::Duration::seconds(lifetime_seconds),
        }
    }

    /// Check if the session is still valid
    pub fn is_valid(&self) -> bool {
        chrono::Utc::now() < self.expires_at
    }
}

/// Generate a random session ID
fn generate_session_id() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    const SESSION_ID_LENGTH: usize = 64;

    let mut rng = rand::thread_rng();
    (0..SESSION_ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Session store trait for different backends
pub trait SessionStore: Send + Sync {
    /// Get a valid session by ID
    fn get(&self, session_id: &str) -> Option<Session>;

    /// Store a session
    fn set(&self, session: Session) -> Result<(), SessionError>;

    /// Delete a session
    fn delete(&self, session_id: &str) -> Result<(), SessionError>;
}

/// In-memory session store (for development/testing)
pub struct MemorySessionStore {
    sessions: std::sync::RwLock<HashMap<String, Session>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: std::sync::RwLock::new(HashMap::new()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().ok()?;
        sessions.get(session_id).cloned().filter(|s| s.is_valid())
    }

    fn set(&self, session: Session) -> Result<(), SessionError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::Unavailable)?;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    fn delete(&self, session_id: &str) -> Result<(), SessionError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::Unavailable)?;
        sessions.remove(session_id);
        Ok(())
    }
}

/// Extract session ID from a cookie header
pub fn extract_session_id(cookie_header: &str, cookie_name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let part = part.trim();
        if let Some((name, value)) = part.split_once('=') {
            if name.trim() == cookie_name {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}
