//! Ticket repository (PostgreSQL)
//!
//! Tables: tickets, ticket_owners, ticket_watchers

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::str::FromStr;
use tt_core::traits::Id;
use tt_models::{Priority, Project, Ticket, User};

use crate::projects;
use crate::repository::{RepositoryError, RepositoryResult, TicketInclude, TicketRepository};
use crate::users;

/// Ticket row from database
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub hours: i32,
    pub priority: String,
    pub completed: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = RepositoryError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let priority = Priority::from_str(&row.priority).map_err(RepositoryError::Decode)?;

        Ok(Ticket {
            id: Some(row.id),
            project_id: row.project_id,
            name: row.name,
            hours: row.hours,
            priority,
            completed: row.completed,
            task_owners: Vec::new(),
            task_watchers: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const TICKET_COLUMNS: &str =
    "id, project_id, name, hours, priority, completed, created_at, updated_at";

/// PostgreSQL implementation of the ticket repository contract
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replace_members(
        tx: &mut Transaction<'_, Postgres>,
        join_table: &str,
        ticket_id: Id,
        members: &[User],
    ) -> RepositoryResult<()> {
        sqlx::query(&format!(
            "DELETE FROM {} WHERE ticket_id = $1",
            join_table
        ))
        .bind(ticket_id)
        .execute(&mut **tx)
        .await?;

        for user in members {
            let user_id = user.id.ok_or_else(|| {
                RepositoryError::Decode("membership user without id".to_string())
            })?;

            sqlx::query(&format!(
                "INSERT INTO {} (ticket_id, user_id) VALUES ($1, $2)",
                join_table
            ))
            .bind(ticket_id)
            .bind(user_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn project_with_developers(&self, id: Id) -> RepositoryResult<Option<Project>> {
        projects::fetch_project_with_developers(&self.pool, id).await
    }

    async fn ticket(&self, id: Id, include: TicketInclude) -> RepositoryResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {} FROM tickets WHERE id = $1",
            TICKET_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let mut ticket = match row {
            Some(row) => Ticket::try_from(row)?,
            None => return Ok(None),
        };

        if include.owners {
            ticket.task_owners =
                users::fetch_members(&self.pool, "ticket_owners", "ticket_id", id).await?;
        }
        if include.watchers {
            ticket.task_watchers =
                users::fetch_members(&self.pool, "ticket_watchers", "ticket_id", id).await?;
        }

        Ok(Some(ticket))
    }

    async fn user_by_id(&self, id: Id) -> RepositoryResult<Option<User>> {
        let mut user = match users::fetch_user(&self.pool, id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        users::load_roles(&self.pool, &mut user).await?;
        Ok(Some(user))
    }

    async fn user_by_login(&self, login: &str) -> RepositoryResult<Option<User>> {
        let mut user = match users::fetch_user_by_login(&self.pool, login).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        users::load_roles(&self.pool, &mut user).await?;
        Ok(Some(user))
    }

    async fn add_ticket(&self, ticket: Ticket) -> RepositoryResult<Ticket> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "INSERT INTO tickets (project_id, name, hours, priority, completed) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {}",
            TICKET_COLUMNS
        ))
        .bind(ticket.project_id)
        .bind(&ticket.name)
        .bind(ticket.hours)
        .bind(ticket.priority.as_str())
        .bind(ticket.completed)
        .fetch_one(&mut *tx)
        .await?;

        let mut stored = Ticket::try_from(row)?;
        let ticket_id = stored
            .id
            .ok_or_else(|| RepositoryError::Decode("insert returned no id".to_string()))?;

        Self::replace_members(&mut tx, "ticket_owners", ticket_id, &ticket.task_owners).await?;

        tx.commit().await?;

        tracing::debug!(ticket_id, project_id = stored.project_id, "ticket created");

        stored.task_owners = ticket.task_owners;
        Ok(stored)
    }

    async fn update_ticket(
        &self,
        ticket: &Ticket,
        include: TicketInclude,
    ) -> RepositoryResult<()> {
        let ticket_id = ticket
            .id
            .ok_or_else(|| RepositoryError::NotFound("ticket has no id".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE tickets \
             SET name = $1, hours = $2, priority = $3, completed = $4, updated_at = now() \
             WHERE id = $5",
        )
        .bind(&ticket.name)
        .bind(ticket.hours)
        .bind(ticket.priority.as_str())
        .bind(ticket.completed)
        .bind(ticket_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Ticket {} not found",
                ticket_id
            )));
        }

        if include.owners {
            Self::replace_members(&mut tx, "ticket_owners", ticket_id, &ticket.task_owners)
                .await?;
        }
        if include.watchers {
            Self::replace_members(&mut tx, "ticket_watchers", ticket_id, &ticket.task_watchers)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
