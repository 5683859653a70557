//! Router fixture backed by an in-memory repository and pre-seeded
//! sessions

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use tt_api::{router, AppState};
use tt_auth::{MemorySessionStore, Session, SessionPrincipalResolver, SessionStore};
use tt_core::config::AppConfig;
use tt_core::traits::Id;
use tt_db::{RepositoryResult, TicketInclude, TicketRepository};
use tt_models::{role, Project, Ticket, User};

pub const PROJECT_ID: Id = 100;
pub const PM_SESSION: &str = "session-pm";
pub const D1_SESSION: &str = "session-d1";
pub const D2_SESSION: &str = "session-d2";

#[derive(Default)]
struct State {
    projects: HashMap<Id, Project>,
    tickets: HashMap<Id, Ticket>,
    users: HashMap<Id, User>,
    next_ticket_id: Id,
}

/// In-memory repository with the same include semantics as the SQL
/// implementation: reads strip the sets not asked for, writes only
/// synchronize the sets named.
#[derive(Default)]
pub struct InMemoryRepo {
    state: RwLock<State>,
}

impl InMemoryRepo {
    pub fn ticket_count(&self) -> usize {
        self.state.read().unwrap().tickets.len()
    }

    pub fn stored_ticket(&self, id: Id) -> Option<Ticket> {
        self.state.read().unwrap().tickets.get(&id).cloned()
    }

    fn insert_user(&self, user: User) {
        let mut state = self.state.write().unwrap();
        if let Some(id) = user.id {
            state.users.insert(id, user);
        }
    }

    fn insert_project(&self, project: Project) {
        let mut state = self.state.write().unwrap();
        if let Some(id) = project.id {
            state.projects.insert(id, project);
        }
    }

    fn insert_ticket(&self, mut ticket: Ticket) -> Id {
        let mut state = self.state.write().unwrap();
        state.next_ticket_id += 1;
        let id = state.next_ticket_id;
        ticket.id = Some(id);
        state.tickets.insert(id, ticket);
        id
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

    async fn add_ticket(&self, ticket: Ticket) -> RepositoryResult<Ticket> {
        let id = self.insert_ticket(ticket);
        Ok(self.stored_ticket(id).unwrap())
    }

    async fn update_ticket(&self, ticket: &Ticket, include: TicketInclude) -> RepositoryResult<()> {
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

fn user_with_role(id: Id, login: &str, role: &str) -> User {
    let mut user = User::new(login).with_role(role);
    user.id = Some(id);
    user.mail = format!("{}@example.com", login);
    user
}

fn session(token: &str, user_id: Id) -> Session {
    let now = chrono::Utc::now();
    Session {
        id: token.to_string(),
        user_id,
        created_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

/// A router over a repository seeded with one project (id 100), two
/// assigned developers (ids 1 and 2), and a project manager (id 10),
/// each with a live session.
pub fn seeded_app() -> (Router, Arc<InMemoryRepo>) {
    let repo = Arc::new(InMemoryRepo::default());

    let d1 = user_with_role(1, "d1", role::DEVELOPER);
    let d2 = user_with_role(2, "d2", role::DEVELOPER);
    let pm = user_with_role(10, "pm", role::PROJECT_MANAGER);

    let mut project = Project::new("alpha", "Alpha");
    project.id = Some(PROJECT_ID);
    project.add_developer(d1.clone());
    project.add_developer(d2.clone());

    repo.insert_user(d1);
    repo.insert_user(d2);
    repo.insert_user(pm);
    repo.insert_project(project);

    let store = Arc::new(MemorySessionStore::new());
    store.set(session(PM_SESSION, 10)).unwrap();
    store.set(session(D1_SESSION, 1)).unwrap();
    store.set(session(D2_SESSION, 2)).unwrap();

    let resolver = Arc::new(SessionPrincipalResolver::new(store, repo.clone()));
    let state = AppState::new(AppConfig::default(), repo.clone(), resolver);

    (router(state), repo)
}

/// Insert a ticket for project 100 owned by the given developer ids.
pub fn seed_ticket(repo: &InMemoryRepo, owner_ids: &[Id]) -> Id {
    let mut ticket = Ticket::new(PROJECT_ID, "Fix bug", 5);
    for owner_id in owner_ids {
        ticket.add_owner(user_with_role(*owner_id, &format!("d{}", owner_id), role::DEVELOPER));
    }
    repo.insert_ticket(ticket)
}

/// Request with the session cookie and, when a body is given, a JSON
/// content type.
pub fn request(method: &str, uri: &str, session_token: &str, body: Option<&str>) -> Request<Body> {
    let cookie = format!("_tickettrack_session={}", session_token);
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie);

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
