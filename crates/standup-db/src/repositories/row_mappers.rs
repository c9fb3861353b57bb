//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use standup_core::{Project, Related, RepositoryError, Status, User};

/// Columns selected for project queries.
pub const PROJECT_COLUMNS: &str = "id, name, slug";

/// Columns selected for user queries.
pub const USER_COLUMNS: &str = "id, username, name, email, slug";

/// Status query joined with its user and project.
pub const STATUS_SELECT: &str = "SELECT s.id, s.content, s.created_at, \
     u.id AS user_id, u.username, u.name AS user_name, u.email, u.slug AS user_slug, \
     p.id AS project_id, p.name AS project_name, p.slug AS project_slug \
     FROM statuses s \
     JOIN users u ON u.id = s.user_id \
     JOIN projects p ON p.id = s.project_id";

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

pub fn row_to_project(row: &SqliteRow) -> Result<Project, RepositoryError> {
    Ok(Project {
        id: Some(column(row, "id")?),
        name: column(row, "name")?,
        slug: column(row, "slug")?,
    })
}

pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: Some(column(row, "id")?),
        username: column(row, "username")?,
        name: column(row, "name")?,
        email: column(row, "email")?,
        slug: column(row, "slug")?,
    })
}

/// Parse a [`STATUS_SELECT`] row into a status with loaded relations.
pub fn row_to_status(row: &SqliteRow) -> Result<Status, RepositoryError> {
    let user = User {
        id: Some(column(row, "user_id")?),
        username: column(row, "username")?,
        name: column(row, "user_name")?,
        email: column(row, "email")?,
        slug: column(row, "user_slug")?,
    };
    let project = Project {
        id: Some(column(row, "project_id")?),
        name: column(row, "project_name")?,
        slug: column(row, "project_slug")?,
    };
    let created_at: DateTime<Utc> = column(row, "created_at")?;

    Ok(Status {
        id: Some(column(row, "id")?),
        content: column(row, "content")?,
        user: Related::Object(user),
        project: Related::Object(project),
        created_at: Some(created_at),
    })
}
