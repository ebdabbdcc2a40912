pub mod dto;
pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
mod seed;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::OnceCell;

use crate::error::Result;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Shared handle to the catalog database.
///
/// Cloning is cheap: all clones share the same pool and the same one-time
/// seed barrier.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    seeded: Arc<OnceCell<()>>,
}

impl Database {
    /// Opens (creating if missing) the database at `database_url`.
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Opens the database with an explicit pool size. In-memory databases
    /// need a single connection, otherwise each pooled connection sees its
    /// own empty database.
    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool,
            seeded: Arc::new(OnceCell::new()),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the catalog tables and inserts sample data, at most once no
    /// matter how many callers race here. Concurrent callers wait for the
    /// first to finish and then observe the fully seeded state; if seeding
    /// fails the error is returned to the caller that triggered it.
    pub async fn ensure_seeded(&self) -> Result<()> {
        self.seeded
            .get_or_try_init(|| seed::run(&self.pool))
            .await?;

        Ok(())
    }
}
