//! Statically declared schema registry.
//!
//! Every installed app that owns tables declares them here as an
//! [`AppSchema`]. [`Metadata::for_apps`] collects the tables of the apps a
//! configuration installs and orders them so that referenced tables are
//! created before the tables that reference them; [`Metadata::drop_all`]
//! walks the same order backwards.
//!
//! All statements are idempotent (`IF NOT EXISTS` / `IF EXISTS`), so
//! creating the schema after a previous drop, or twice in a row, succeeds.

use std::collections::HashSet;

use sqlx::SqlitePool;
use thiserror::Error;

/// A single table definition.
#[derive(Debug, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    /// `CREATE TABLE IF NOT EXISTS ...` statement.
    pub create: &'static str,
    /// `CREATE INDEX IF NOT EXISTS ...` statements run after the table.
    pub indexes: &'static [&'static str],
    /// Tables this one holds foreign keys into.
    pub references: &'static [&'static str],
}

/// The tables owned by one installed app.
#[derive(Debug, PartialEq, Eq)]
pub struct AppSchema {
    pub app: &'static str,
    pub tables: &'static [TableDef],
}

/// Tables owned by the `status` app.
pub const STATUS_APP: AppSchema = AppSchema {
    app: "status",
    tables: &[
        TableDef {
            name: "projects",
            create: r"
                CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    slug TEXT NOT NULL UNIQUE
                )
            ",
            indexes: &[],
            references: &[],
        },
        TableDef {
            name: "statuses",
            create: r"
                CREATE TABLE IF NOT EXISTS statuses (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    content TEXT NOT NULL,
                    user_id INTEGER NOT NULL,
                    project_id INTEGER NOT NULL,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
                )
            ",
            indexes: &[
                "CREATE INDEX IF NOT EXISTS idx_statuses_user ON statuses(user_id)",
                "CREATE INDEX IF NOT EXISTS idx_statuses_project ON statuses(project_id)",
            ],
            references: &["users", "projects"],
        },
    ],
};

/// Tables owned by the `users` app.
pub const USERS_APP: AppSchema = AppSchema {
    app: "users",
    tables: &[TableDef {
        name: "users",
        create: r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE
            )
        ",
        indexes: &[],
        references: &[],
    }],
};

/// Every app that declares tables.
pub static REGISTRY: &[&AppSchema] = &[&STATUS_APP, &USERS_APP];

/// Look up the schema declared by an installed app.
pub fn schema_for(app: &str) -> Option<&'static AppSchema> {
    REGISTRY.iter().copied().find(|schema| schema.app == app)
}

/// Schema assembly and DDL errors. All of them are fatal to the caller.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("table '{table}' references '{references}', which no installed app declares")]
    MissingReference {
        table: &'static str,
        references: &'static str,
    },

    #[error("table '{0}' is declared by more than one installed app")]
    DuplicateTable(&'static str),

    #[error("reference cycle between tables: {0}")]
    Cycle(String),

    #[error("failed to {action} table '{table}': {source}")]
    Statement {
        action: &'static str,
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// The ordered set of tables for one application instance.
#[derive(Debug, Clone)]
pub struct Metadata {
    tables: Vec<&'static TableDef>,
}

impl Metadata {
    /// Collect the tables declared by the installed apps.
    ///
    /// Apps without declared tables are skipped. Duplicate app names count
    /// once.
    pub fn for_apps<S: AsRef<str>>(installed_apps: &[S]) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        let mut schemas = Vec::new();

        for app in installed_apps {
            let app = app.as_ref();
            if !seen.insert(app) {
                continue;
            }
            match schema_for(app) {
                Some(schema) => schemas.push(schema),
                None => {
                    tracing::debug!(target: "standup.schema", app, "Installed app declares no tables");
                }
            }
        }

        Self::from_schemas(&schemas)
    }

    /// Build metadata from explicit schema declarations.
    pub fn from_schemas(schemas: &[&'static AppSchema]) -> Result<Self, SchemaError> {
        let mut names = HashSet::new();
        let mut tables = Vec::new();
        for schema in schemas {
            for table in schema.tables {
                if !names.insert(table.name) {
                    return Err(SchemaError::DuplicateTable(table.name));
                }
                tables.push(table);
            }
        }

        Ok(Self {
            tables: sort_by_references(tables)?,
        })
    }

    /// Table names in creation order.
    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|table| table.name).collect()
    }

    /// Whether `name` is one of this metadata's tables.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.iter().any(|table| table.name == name)
    }

    /// Create every table and index that does not exist yet.
    pub async fn create_all(&self, pool: &SqlitePool) -> Result<(), SchemaError> {
        for table in &self.tables {
            sqlx::query(table.create)
                .execute(pool)
                .await
                .map_err(|source| SchemaError::Statement {
                    action: "create",
                    table: table.name,
                    source,
                })?;

            for index in table.indexes {
                sqlx::query(index)
                    .execute(pool)
                    .await
                    .map_err(|source| SchemaError::Statement {
                        action: "index",
                        table: table.name,
                        source,
                    })?;
            }
        }

        tracing::debug!(target: "standup.schema", tables = ?self.table_names(), "Created schema");
        Ok(())
    }

    /// Drop every table, referencing tables first.
    pub async fn drop_all(&self, pool: &SqlitePool) -> Result<(), SchemaError> {
        for table in self.tables.iter().rev() {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name))
                .execute(pool)
                .await
                .map_err(|source| SchemaError::Statement {
                    action: "drop",
                    table: table.name,
                    source,
                })?;
        }

        tracing::debug!(target: "standup.schema", tables = ?self.table_names(), "Dropped schema");
        Ok(())
    }

    /// Which of this metadata's tables currently exist, in creation order.
    pub async fn existing_tables(&self, pool: &SqlitePool) -> Result<Vec<&'static str>, SchemaError> {
        let present: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
                .fetch_all(pool)
                .await
                .map_err(|source| SchemaError::Statement {
                    action: "inspect",
                    table: "sqlite_master",
                    source,
                })?;

        Ok(self
            .tables
            .iter()
            .map(|table| table.name)
            .filter(|name| present.iter().any(|p| p == name))
            .collect())
    }
}

/// Order tables so every table follows the tables it references.
///
/// Registration order is kept among tables whose references are already
/// satisfied.
fn sort_by_references(
    tables: Vec<&'static TableDef>,
) -> Result<Vec<&'static TableDef>, SchemaError> {
    let known: HashSet<&str> = tables.iter().map(|table| table.name).collect();
    for table in &tables {
        if let Some(missing) = table.references.iter().find(|r| !known.contains(*r)) {
            return Err(SchemaError::MissingReference {
                table: table.name,
                references: *missing,
            });
        }
    }

    let mut pending = tables;
    let mut sorted = Vec::with_capacity(pending.len());
    let mut placed: HashSet<&str> = HashSet::new();

    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|table| {
            let ready = table
                .references
                .iter()
                .all(|r| *r == table.name || placed.contains(r));
            if ready {
                placed.insert(table.name);
                sorted.push(*table);
            }
            !ready
        });

        if pending.len() == before {
            let names: Vec<&str> = pending.iter().map(|table| table.name).collect();
            return Err(SchemaError::Cycle(names.join(", ")));
        }
    }

    Ok(sorted)
}
