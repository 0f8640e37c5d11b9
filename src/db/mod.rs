pub mod repository;

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Deadline, NewDeadline};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn connect(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Single-connection in-memory database. Every new SQLite memory connection
/// is a separate database, so the pool never opens a second one.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn migrate(db: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(db).await
}

/// Persistent collection of deadlines addressed by id.
#[async_trait]
pub trait DeadlineStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
    async fn find_all(&self) -> Result<Vec<Deadline>, AppError>;
    async fn create(&self, fields: NewDeadline) -> Result<Deadline, AppError>;
    async fn update_by_id(&self, id: &str, fields: NewDeadline) -> Result<Option<Deadline>, AppError>;
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct SqliteDeadlineStore {
    db: SqlitePool,
}

impl SqliteDeadlineStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeadlineStore for SqliteDeadlineStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("select 1").execute(&self.db).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Deadline>, AppError> {
        Ok(repository::fetch_deadlines(&self.db).await?)
    }

    async fn create(&self, fields: NewDeadline) -> Result<Deadline, AppError> {
        Ok(repository::insert_deadline(&self.db, fields).await?)
    }

    async fn update_by_id(&self, id: &str, fields: NewDeadline) -> Result<Option<Deadline>, AppError> {
        Ok(repository::update_deadline(&self.db, id, fields).await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        Ok(repository::delete_deadline(&self.db, id).await?)
    }
}
