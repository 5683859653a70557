//! Role names
//!
//! Role memberships are managed by the identity subsystem; this crate only
//! needs the names the authorization rules refer to.

/// Role allowed to create tickets for a project
pub const PROJECT_MANAGER: &str = "Project Manager";

/// Role of users that can be assigned to projects and tickets
pub const DEVELOPER: &str = "Developer";
