//! In-memory repository double for exercising the services end to end

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tt_auth::Principal;
use tt_core::traits::Id;
use tt_db::{RepositoryResult, TicketInclude, TicketRepository};
use tt_models::{role, Project, Ticket, User};

#[derive(Default)]
struct State {
    projects: HashMap<Id, Project>,
    tickets: HashMap<Id, Ticket>,
    users: HashMap<Id, User>,
    next_ticket_id: Id,
}

/// In-memory implementation of the repository contract.
///
/// Tickets are stored with their full owner and watcher sets; reads strip
/// the sets the caller did not ask for, and writes only synchronize the
/// sets the caller names, mirroring the SQL implementation.
#[derive(Default)]
pub struct InMemoryRepo {
    state: RwLock<State>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        let mut state = self.state.write().unwrap();
        if let Some(id) = user.id {
            state.users.insert(id, user);
        }
    }

    pub fn add_project(&self, project: Project) {
        let mut state = self.state.write().unwrap();
        if let Some(id) = project.id {
            state.projects.insert(id, project);
        }
    }

    pub fn ticket_count(&self) -> usize {
        self.state.read().unwrap().tickets.len()
    }

    /// The stored ticket with all sets populated
    pub fn stored_ticket(&self, id: Id) -> Option<Ticket> {
        self.state.read().unwrap().tickets.get(&id).cloned()
    }
}

fn apply_include(mut ticket: Ticket, include: TicketInclude) -> Ticket {
    if !include.owners {
        ticket.task_owners = Vec::new();
    }
    if !include.watchers {
        ticket.task_watchers = Vec::new();
    }
    ticket
}

#[async_trait]
impl TicketRepository for InMemoryRepo {
    async fn project_with_developers(&self, id: Id) -> RepositoryResult<Option<Project>> {
        Ok(self.state.read().unwrap().projects.get(&id).cloned())
    }

    async fn ticket(&self, id: Id, include: TicketInclude) -> RepositoryResult<Option<Ticket>> {
        let state = self.state.read().unwrap();
        Ok(state
            .tickets
            .get(&id)
            .cloned()
            .map(|t| apply_include(t, include)))
    }

    async fn user_by_id(&self, id: Id) -> RepositoryResult<Option<User>> {
        Ok(self.state.read().unwrap().users.get(&id).cloned())
    }

    async fn user_by_login(&self, login: &str) -> RepositoryResult<Option<User>> {
        let state = self.state.read().unwrap();
        Ok(state.users.values().find(|u| u.login == login).cloned())
    }

    async fn add_ticket(&self, mut ticket: Ticket) -> RepositoryResult<Ticket> {
        let mut state = self.state.write().unwrap();
        state.next_ticket_id += 1;
        let id = state.next_ticket_id;
        ticket.id = Some(id);
        state.tickets.insert(id, ticket.clone());
        Ok(ticket)
    }

    async fn update_ticket(
        &self,
        ticket: &Ticket,
        include: TicketInclude,
    ) -> RepositoryResult<()> {
        let mut state = self.state.write().unwrap();
        let id = ticket.id.unwrap_or(0);
        let stored = state
            .tickets
            .get_mut(&id)
            .ok_or_else(|| tt_db::RepositoryError::NotFound(format!("Ticket {}", id)))?;

        stored.name = ticket.name.clone();
        stored.hours = ticket.hours;
        stored.priority = ticket.priority;
        stored.completed = ticket.completed;
        if include.owners {
            stored.task_owners = ticket.task_owners.clone();
        }
        if include.watchers {
            stored.task_watchers = ticket.task_watchers.clone();
        }

        Ok(())
    }
}

pub fn developer(id: Id, login: &str) -> User {
    let mut user = User::new(login).with_role(role::DEVELOPER);
    user.id = Some(id);
    user.mail = format!("{}@example.com", login);
    user
}

pub fn project_manager(id: Id, login: &str) -> User {
    let mut user = User::new(login).with_role(role::PROJECT_MANAGER);
    user.id = Some(id);
    user.mail = format!("{}@example.com", login);
    user
}

/// A repository seeded with one project, two assigned developers (ids 1
/// and 2), and a project manager (id 10); returns the principals in the
/// order (pm, d1, d2) plus the project id.
pub fn seeded_repo() -> (InMemoryRepo, Principal, Principal, Principal, Id) {
    let repo = InMemoryRepo::new();

    let d1 = developer(1, "d1");
    let d2 = developer(2, "d2");
    let pm = project_manager(10, "pm");

    let mut project = Project::new("alpha", "Alpha");
    project.id = Some(100);
    project.add_developer(d1.clone());
    project.add_developer(d2.clone());

    repo.add_user(d1.clone());
    repo.add_user(d2.clone());
    repo.add_user(pm.clone());
    repo.add_project(project);

    (
        repo,
        Principal::new(pm),
        Principal::new(d1),
        Principal::new(d2),
        100,
    )
}
