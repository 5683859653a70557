//! Resolved principal

use tt_core::traits::Id;
use tt_models::{role, User};

/// The authenticated caller of a ticket operation.
///
/// Wraps the resolved user with their role memberships. Re-resolved on
/// every request; never cached across requests, since role and assignment
/// membership can change between them.
#[derive(Debug, Clone)]
pub struct Principal {
    user: User,
}

impl Principal {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The principal's user id.
    ///
    /// Resolved principals always come from persisted users; an id of 0
    /// never matches any membership set.
    pub fn id(&self) -> Id {
        self.user.id.unwrap_or(0)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn login(&self) -> &str {
        &self.user.login
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user.has_role(role)
    }

    pub fn is_project_manager(&self) -> bool {
        self.has_role(role::PROJECT_MANAGER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_roles() {
        let mut user = User::new("pm").with_role(role::PROJECT_MANAGER);
        user.id = Some(5);

        let principal = Principal::new(user);
        assert_eq!(principal.id(), 5);
        assert!(principal.is_project_manager());
        assert!(!principal.has_role(role::DEVELOPER));
    }
}
