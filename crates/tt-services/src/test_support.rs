//! Shared doubles and fixture builders for service unit tests

use tt_auth::Principal;
use tt_core::traits::Id;
use tt_db::{RepositoryResult, TicketInclude, TicketRepository};
use tt_models::{Project, Ticket, User};

mockall::mock! {
    pub Repo {}

    #[async_trait::async_trait]
    impl TicketRepository for Repo {
        async fn project_with_developers(&self, id: Id) -> RepositoryResult<Option<Project>>;
        async fn ticket(&self, id: Id, include: TicketInclude) -> RepositoryResult<Option<Ticket>>;
        async fn user_by_id(&self, id: Id) -> RepositoryResult<Option<User>>;
        async fn user_by_login(&self, login: &str) -> RepositoryResult<Option<User>>;
        async fn add_ticket(&self, ticket: Ticket) -> RepositoryResult<Ticket>;
        async fn update_ticket(&self, ticket: &Ticket, include: TicketInclude) -> RepositoryResult<()>;
    }
}

pub fn developer(id: Id) -> User {
    let mut user = User::new(format!("dev{}", id));
    user.id = Some(id);
    user.firstname = "Dev".to_string();
    user.lastname = format!("{}", id);
    user.mail = format!("dev{}@example.com", id);
    user
}

pub fn principal(id: Id, roles: &[&str]) -> Principal {
    let mut user = developer(id);
    user.roles = roles.iter().map(|r| r.to_string()).collect();
    Principal::new(user)
}

pub fn project_with_developers(id: Id, developer_ids: &[Id]) -> Project {
    let mut project = Project::new(format!("project-{}", id), format!("Project {}", id));
    project.id = Some(id);
    for dev_id in developer_ids {
        project.add_developer(developer(*dev_id));
    }
    project
}

pub fn ticket_with_owners(id: Id, project_id: Id, owner_ids: &[Id]) -> Ticket {
    let mut ticket = Ticket::new(project_id, format!("Ticket {}", id), 5);
    ticket.id = Some(id);
    for owner_id in owner_ids {
        ticket.add_owner(developer(*owner_id));
    }
    ticket
}
