use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("diesel error: {0:?}")]
    Diesel(#[from] diesel::result::Error),

    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("migration error: {0}")]
    Migration(String),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("gave up after {attempts} attempts to create or fetch a row")]
    RetriesExhausted { attempts: usize },

    /// used to roll back a transaction when an insert lost a conflict race
    #[error("no rows affected")]
    NoRowsAffected,
}
