use wrkt_core::error::CoreError;
use wrkt_core::types::DbId;

/// PostgreSQL `foreign_key_violation`.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Failure of a program-tree write.
///
/// `ValidationRejected` is raised before a transaction starts and
/// `Unavailable` usually while acquiring one. Every other variant means the
/// transaction was rolled back, so no partial effect is visible.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// The payload is unusable as given.
    #[error("Validation failed: {0}")]
    ValidationRejected(String),

    /// A referenced row does not exist or is not owned by the expected parent.
    #[error("Reference violation: {0}")]
    ReferenceViolation(String),

    /// The program being updated does not exist.
    #[error("Program {0} not found")]
    ProgramNotFound(DbId),

    /// A concurrent write claimed the same unique slot first.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No connection could be acquired from the pool in time.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Any other storage-layer failure.
    #[error("Reconciliation failed: {0}")]
    ReconciliationFailed(String),
}

impl From<sqlx::Error> for ReconcileError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_FOREIGN_KEY_VIOLATION) =>
            {
                let constraint = db_err.constraint().unwrap_or("unknown");
                ReconcileError::ReferenceViolation(format!(
                    "{} (constraint {constraint})",
                    db_err.message()
                ))
            }
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                let constraint = db_err.constraint().unwrap_or("unknown");
                ReconcileError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                ReconcileError::Unavailable(err.to_string())
            }
            _ => ReconcileError::ReconciliationFailed(err.to_string()),
        }
    }
}

impl From<CoreError> for ReconcileError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ReconcileError::ValidationRejected(msg),
            CoreError::NotFound { entity, id } => {
                ReconcileError::ReferenceViolation(format!("{entity} with id {id} not found"))
            }
        }
    }
}
