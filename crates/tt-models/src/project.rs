//! Project model
//!
//! Table: projects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tt_core::traits::{Entity, Id, Identifiable, Timestamped};
use validator::Validate;

use crate::user::User;

/// Project entity
///
/// A project owns zero or more tickets and carries the set of developers
/// assigned to it. Developer membership is what the watch-toggle
/// authorization predicate checks against.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<Id>,

    /// Unique identifier (URL-safe slug)
    #[validate(length(min = 1, max = 100))]
    pub identifier: String,

    /// Display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Developers assigned to this project (set semantics by user id)
    #[serde(default)]
    pub developers: Vec<User>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: None,
            identifier: String::new(),
            name: String::new(),
            developers: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Identifiable for Project {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Timestamped for Project {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Project {
    const TABLE_NAME: &'static str = "projects";
    const TYPE_NAME: &'static str = "Project";
}

impl Project {
    /// Create a new project with minimal required fields
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check whether a user is in this project's developer set
    pub fn has_developer(&self, user_id: Id) -> bool {
        self.developers.iter().any(|d| d.id == Some(user_id))
    }

    /// Add a developer, keeping set semantics by user id
    pub fn add_developer(&mut self, user: User) {
        if let Some(id) = user.id {
            if self.has_developer(id) {
                return;
            }
        }
        self.developers.push(user);
    }

    /// Generate a valid identifier from a name
    pub fn identifier_from_name(name: &str) -> String {
        name.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .trim_matches('-')
            .to_string()
    }
}
