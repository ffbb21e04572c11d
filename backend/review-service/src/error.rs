/// Error types for review-service
use thiserror::Error;

use crate::domain::models::MapId;

/// Coarse failure category, used for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewErrorKind {
    Connection,
    Schema,
    QueryExecution,
}

impl ReviewErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewErrorKind::Connection => "connection",
            ReviewErrorKind::Schema => "schema",
            ReviewErrorKind::QueryExecution => "query_execution",
        }
    }
}

#[derive(Error, Debug)]
pub enum ReviewError {
    /// The connection is closed, broken or unreachable
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// No relation partition is registered for the map
    #[error("Relation partition for map {map_id} does not exist")]
    MissingPartition { map_id: MapId },

    /// The partition or its tag column cannot be evaluated
    #[error("Schema error: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Query execution failed: {0}")]
    QueryExecution(#[source] sqlx::Error),
}

impl ReviewError {
    pub fn kind(&self) -> ReviewErrorKind {
        match self {
            ReviewError::Connection(_) => ReviewErrorKind::Connection,
            ReviewError::MissingPartition { .. } | ReviewError::Schema(_) => {
                ReviewErrorKind::Schema
            }
            ReviewError::QueryExecution(_) => ReviewErrorKind::QueryExecution,
        }
    }
}

/// Map a PostgreSQL SQLSTATE code onto an error category.
///
/// Class `08` and the admin shutdown codes mean the session is gone.
/// Undefined table/column/function/object mean the partition or its
/// `tags` column does not look the way the query expects.
pub fn classify_sqlstate(code: &str) -> ReviewErrorKind {
    match code {
        "57P01" | "57P02" | "57P03" => ReviewErrorKind::Connection,
        "42P01" | "42703" | "42883" | "42704" => ReviewErrorKind::Schema,
        c if c.starts_with("08") => ReviewErrorKind::Connection,
        _ => ReviewErrorKind::QueryExecution,
    }
}

impl From<sqlx::Error> for ReviewError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => ReviewErrorKind::Connection,
            sqlx::Error::Database(db_err) => db_err
                .code()
                .map(|code| classify_sqlstate(&code))
                .unwrap_or(ReviewErrorKind::QueryExecution),
            _ => ReviewErrorKind::QueryExecution,
        };

        match kind {
            ReviewErrorKind::Connection => ReviewError::Connection(err),
            ReviewErrorKind::Schema => ReviewError::Schema(err),
            ReviewErrorKind::QueryExecution => ReviewError::QueryExecution(err),
        }
    }
}

/// Result type alias for review queries
pub type ReviewResult<T> = Result<T, ReviewError>;
