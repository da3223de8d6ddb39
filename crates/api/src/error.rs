use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wrkt_core::error::CoreError;
use wrkt_db::reconcile::ReconcileError;

/// Message returned in place of any 5xx detail.
const SANITIZED_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`ReconcileError`] for program
/// tree writes, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wrkt_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed program tree write. The transaction was already rolled back.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Reconciliation errors ---
            AppError::Reconcile(err) => classify_reconcile_error(err),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        SANITIZED_MESSAGE.to_string(),
    )
}

/// Map a program tree write failure to an HTTP status, error code and message.
fn classify_reconcile_error(err: &ReconcileError) -> (StatusCode, &'static str, String) {
    match err {
        ReconcileError::ValidationRejected(msg) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        ReconcileError::ProgramNotFound(id) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Program with id {id} not found"),
        ),
        ReconcileError::ReferenceViolation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "REFERENCE_VIOLATION",
            msg.clone(),
        ),
        ReconcileError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        ReconcileError::Unavailable(msg) => {
            tracing::warn!(error = %msg, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "UNAVAILABLE",
                "The service is temporarily unavailable".to_string(),
            )
        }
        ReconcileError::ReconciliationFailed(msg) => {
            tracing::error!(error = %msg, "Reconciliation failed");
            internal_error()
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Pool exhaustion maps to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            classify_reconcile_error(&ReconcileError::Unavailable(err.to_string()))
        }
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
