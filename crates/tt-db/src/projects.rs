//! Project row mapping and queries
//!
//! Tables: projects, project_developers

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tt_core::traits::Id;
use tt_models::Project;

use crate::repository::RepositoryResult;
use crate::users;

/// Project row from database
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub identifier: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: Some(row.id),
            identifier: row.identifier,
            name: row.name,
            developers: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fetch a project with its developer set populated
pub(crate) async fn fetch_project_with_developers(
    pool: &PgPool,
    id: Id,
) -> RepositoryResult<Option<Project>> {
    let row = sqlx::query_as::<_, ProjectRow>(
        "SELECT id, identifier, name, created_at, updated_at FROM projects WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let mut project = match row {
        Some(row) => Project::from(row),
        None => return Ok(None),
    };

    project.developers =
        users::fetch_members(pool, "project_developers", "project_id", id).await?;

    Ok(Some(project))
}
