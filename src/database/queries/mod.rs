mod enriched_set;
mod group;
mod keyword;
mod search;
mod session;

use std::{future::Future, path::PathBuf, time::Duration};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::DatabaseError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// How often a create-or-fetch is retried when a concurrent writer keeps winning the race.
const MAX_CREATE_ATTEMPTS: usize = 5;

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

#[derive(Debug)]
pub struct ConnectionOptions;

impl diesel::r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error>
    for ConnectionOptions
{
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            conn.batch_execute(&format!(
                "PRAGMA busy_timeout = {};",
                Duration::from_secs(30).as_millis()
            ))?;
            conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            conn.batch_execute("PRAGMA foreign_keys = ON;")?;
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

impl Database {
    #[tracing::instrument(name = "Database::new", err(Debug))]
    pub async fn new(path: PathBuf) -> anyhow::Result<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(path.to_string_lossy());
        let pool = Pool::builder()
            .connection_customizer(Box::new(ConnectionOptions))
            .connection_timeout(Duration::from_secs(30))
            .test_on_check_out(true)
            .max_size(16)
            .build(manager)?;

        let database = Self { pool };
        database
            .pool
            .exec(|conn| {
                conn.run_pending_migrations(MIGRATIONS)
                    .map_err(|err| DatabaseError::Migration(err.to_string()))?;
                Ok(())
            })
            .await?;

        Ok(database)
    }
}

pub(super) trait PoolExt {
    /// Runs a blocking diesel closure on a pooled connection without stalling the runtime.
    fn exec<T, F>(&self, f: F) -> impl Future<Output = Result<T, DatabaseError>> + Send
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, DatabaseError> + Send
            + 'static;
}

impl PoolExt for SqlitePool {
    fn exec<T, F>(&self, f: F) -> impl Future<Output = Result<T, DatabaseError>> + Send
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, DatabaseError> + Send
            + 'static,
    {
        let pool = self.clone();
        async move {
            tokio::task::spawn_blocking(move || {
                let mut conn = pool.get()?;
                f(&mut conn)
            })
            .await?
        }
    }
}

/// Repeats `attempt` until it yields a row. `None` means a concurrent writer won a
/// race and the lookup should be tried again.
fn with_retries<T>(
    mut attempt: impl FnMut() -> Result<Option<T>, DatabaseError>,
) -> Result<T, DatabaseError> {
    for attempt_number in 1..=MAX_CREATE_ATTEMPTS {
        if let Some(value) = attempt()? {
            return Ok(value);
        }
        tracing::debug!(attempt_number, "lost insert race, retrying");
    }
    Err(DatabaseError::RetriesExhausted {
        attempts: MAX_CREATE_ATTEMPTS,
    })
}
