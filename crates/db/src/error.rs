//! Mapping of sqlx errors onto domain errors.

use herhealth_core::error::CoreError;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error into a [`CoreError`].
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to `Conflict`.
/// - `uq_users_email` gets the user-facing "User already exists" message.
/// - Everything else maps to `Internal` and is logged.
pub fn into_core(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint == "uq_users_email" {
                return CoreError::Conflict("User already exists".into());
            }
            if constraint.starts_with("uq_") {
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(format!("Database error: {err}"))
}
