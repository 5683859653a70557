//! Ticket model
//!
//! Table: tickets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tt_core::traits::{Entity, Id, Identifiable, Timestamped};
use validator::Validate;

use crate::priority::Priority;
use crate::user::User;

/// Outcome of a watcher toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchToggle {
    Added,
    Removed,
}

/// Ticket entity
///
/// Belongs to exactly one project. Carries the two independent user sets
/// that drive authorization: task owners (assigned to do the work) and
/// task watchers (opted in to follow the ticket).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Option<Id>,

    /// Owning project (non-null foreign key)
    pub project_id: Id,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Required estimate / remaining work amount
    pub hours: i32,

    #[serde(default)]
    pub priority: Priority,

    /// Flipped only by the completion toggle, never set directly
    #[serde(default)]
    pub completed: bool,

    /// Users assigned to do the work (set semantics by user id)
    #[serde(default)]
    pub task_owners: Vec<User>,

    /// Users following the ticket, independent of ownership
    #[serde(default)]
    pub task_watchers: Vec<User>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn new(project_id: Id, name: impl Into<String>, hours: i32) -> Self {
        Self {
            id: None,
            project_id,
            name: name.into(),
            hours,
            priority: Priority::default(),
            completed: false,
            task_owners: Vec::new(),
            task_watchers: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Check whether a user is one of this ticket's task owners
    pub fn is_task_owner(&self, user_id: Id) -> bool {
        self.task_owners.iter().any(|u| u.id == Some(user_id))
    }

    /// Check whether a user is watching this ticket
    pub fn is_watcher(&self, user_id: Id) -> bool {
        self.task_watchers.iter().any(|u| u.id == Some(user_id))
    }

    /// Add a task owner, keeping set semantics by user id
    pub fn add_owner(&mut self, user: User) {
        if let Some(id) = user.id {
            if self.is_task_owner(id) {
                return;
            }
        }
        self.task_owners.push(user);
    }

    /// Flip the completion flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Flip watcher membership for a user: add if absent, remove if
    /// present. Exactly one of the two happens per call.
    pub fn toggle_watcher(&mut self, user: User) -> WatchToggle {
        match user.id {
            Some(id) if self.is_watcher(id) => {
                self.task_watchers.retain(|u| u.id != Some(id));
                WatchToggle::Removed
            }
            _ => {
                self.task_watchers.push(user);
                WatchToggle::Added
            }
        }
    }
}

impl Identifiable for Ticket {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl Timestamped for Ticket {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Ticket {
    const TABLE_NAME: &'static str = "tickets";
    const TYPE_NAME: &'static str = "Ticket";
}
