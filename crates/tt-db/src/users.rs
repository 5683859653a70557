//! User row mapping and queries
//!
//! Tables: users, user_roles

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tt_core::traits::Id;
use tt_models::User;

use crate::repository::RepositoryResult;

/// User row from database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    pub mail: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: Some(row.id),
            login: row.login,
            firstname: row.firstname,
            lastname: row.lastname,
            mail: row.mail,
            roles: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const USER_COLUMNS: &str = "id, login, firstname, lastname, mail, created_at, updated_at";

/// Fetch a user by id, without roles
pub(crate) async fn fetch_user(pool: &PgPool, id: Id) -> RepositoryResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        USER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(User::from))
}

/// Fetch a user by login name, without roles
pub(crate) async fn fetch_user_by_login(
    pool: &PgPool,
    login: &str,
) -> RepositoryResult<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
        "SELECT {} FROM users WHERE login = $1",
        USER_COLUMNS
    ))
    .bind(login)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(User::from))
}

/// Populate role memberships on a loaded user
pub(crate) async fn load_roles(pool: &PgPool, user: &mut User) -> RepositoryResult<()> {
    let user_id = match user.id {
        Some(id) => id,
        None => return Ok(()),
    };

    let roles = sqlx::query_scalar::<_, String>(
        "SELECT role FROM user_roles WHERE user_id = $1 ORDER BY role",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    user.roles = roles;
    Ok(())
}

/// Fetch the users joined through a membership table
/// (`project_developers`, `ticket_owners`, `ticket_watchers`), without roles
pub(crate) async fn fetch_members(
    pool: &PgPool,
    join_table: &str,
    fk_column: &str,
    owner_id: Id,
) -> RepositoryResult<Vec<User>> {
    let sql = format!(
        "SELECT u.id, u.login, u.firstname, u.lastname, u.mail, u.created_at, u.updated_at \
         FROM users u \
         JOIN {table} m ON m.user_id = u.id \
         WHERE m.{fk} = $1 \
         ORDER BY u.id",
        table = join_table,
        fk = fk_column,
    );

    let rows = sqlx::query_as::<_, UserRow>(&sql)
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(User::from).collect())
}
