use sqlx::Error as SqlxError;
use thiserror::Error;

/// `NotFound` means the statement touched no row.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Custom: {0}")]
    Custom(String),
}
