//! The shared database session.
//!
//! A [`Session`] is bound to one connection pool. Writes go through a
//! [`UnitOfWork`]: entities handed to `add` are inserted into an open
//! transaction and handed back, with their IDs, by `commit`. Rolling back
//! or dropping an uncommitted unit of work discards the staged entities
//! together with their rows, so no caller ever holds an ID that was not
//! committed.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use standup_core::{Entity, Project, Related, RepositoryError, Status, User};

use crate::error::map_sqlx_error;

/// An entity that knows how to insert itself.
#[async_trait]
pub trait Persist: Entity + Send {
    /// Insert the entity on `conn` and record its new ID.
    async fn insert(&mut self, conn: &mut SqliteConnection) -> Result<(), RepositoryError>;
}

/// Handle used to stage and commit persistence operations.
#[derive(Debug, Clone)]
pub struct Session {
    pool: SqlitePool,
}

impl Session {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The pool this session is bound to.
    pub const fn bind(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open a unit of work for entities of type `E`.
    pub async fn begin<E: Persist>(&self) -> Result<UnitOfWork<E>, RepositoryError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Storage(format!("begin failed: {e}")))?;
        Ok(UnitOfWork {
            tx,
            staged: Vec::new(),
        })
    }

    /// Add `entity` and commit immediately, returning it with its ID set.
    pub async fn save<E: Persist>(&self, entity: E) -> Result<E, RepositoryError> {
        let mut uow = self.begin().await?;
        uow.add(entity).await?;
        uow.commit()
            .await?
            .pop()
            .ok_or_else(|| RepositoryError::Storage("commit returned no entity".to_string()))
    }
}

/// One open transaction on a [`Session`].
pub struct UnitOfWork<E> {
    tx: Transaction<'static, Sqlite>,
    staged: Vec<E>,
}

impl<E: Persist> UnitOfWork<E> {
    /// Stage `entity` in this unit of work.
    ///
    /// Unsaved entities (and, for a status, its unsaved relations) are
    /// inserted into the open transaction. Entities that already have an ID
    /// are staged untouched. If the insert fails the entity is discarded.
    pub async fn add(&mut self, mut entity: E) -> Result<(), RepositoryError> {
        if !entity.is_persisted() {
            entity.insert(&mut self.tx).await?;
        }
        self.staged.push(entity);
        Ok(())
    }

    /// Number of entities staged so far.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Commit and hand back every staged entity, in the order added.
    pub async fn commit(self) -> Result<Vec<E>, RepositoryError> {
        self.tx
            .commit()
            .await
            .map_err(|e| RepositoryError::Storage(format!("commit failed: {e}")))?;
        tracing::debug!(target: "standup.session", added = self.staged.len(), "Committed unit of work");
        Ok(self.staged)
    }

    /// Discard every staged entity.
    pub async fn rollback(self) -> Result<(), RepositoryError> {
        self.tx
            .rollback()
            .await
            .map_err(|e| RepositoryError::Storage(format!("rollback failed: {e}")))
    }
}

#[async_trait]
impl Persist for Project {
    async fn insert(&mut self, conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        let result = sqlx::query("INSERT INTO projects (name, slug) VALUES (?, ?)")
            .bind(&self.name)
            .bind(&self.slug)
            .execute(&mut *conn)
            .await
            .map_err(|e| map_sqlx_error(e, &format!("project {}", self.slug)))?;

        self.id = Some(result.last_insert_rowid());
        Ok(())
    }
}

#[async_trait]
impl Persist for User {
    async fn insert(&mut self, conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("INSERT INTO users (username, name, email, slug) VALUES (?, ?, ?, ?)")
                .bind(&self.username)
                .bind(&self.name)
                .bind(&self.email)
                .bind(&self.slug)
                .execute(&mut *conn)
                .await
                .map_err(|e| map_sqlx_error(e, &format!("user {}", self.username)))?;

        self.id = Some(result.last_insert_rowid());
        Ok(())
    }
}

#[async_trait]
impl Persist for Status {
    /// Unsaved related objects are inserted first, on the same connection.
    async fn insert(&mut self, conn: &mut SqliteConnection) -> Result<(), RepositoryError> {
        if let Related::Object(user) = &mut self.user {
            if !user.is_persisted() {
                user.insert(&mut *conn).await?;
            }
        }
        if let Related::Object(project) = &mut self.project {
            if !project.is_persisted() {
                project.insert(&mut *conn).await?;
            }
        }

        let user_id = self
            .user_id()
            .ok_or_else(|| RepositoryError::Constraint("status has no user".to_string()))?;
        let project_id = self
            .project_id()
            .ok_or_else(|| RepositoryError::Constraint("status has no project".to_string()))?;
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO statuses (content, user_id, project_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&self.content)
        .bind(user_id)
        .bind(project_id)
        .bind(created_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| map_sqlx_error(e, "status"))?;

        self.id = Some(result.last_insert_rowid());
        self.created_at = Some(created_at);
        Ok(())
    }
}
