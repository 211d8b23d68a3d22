//! Error type for the orchestration layer.
//!
//! Aggregates the lower-layer errors and adds the two user-visible
//! conditions that only exist at this level: bad credentials and a
//! duplicate registration email.

use thiserror::Error;

use almacen_core::CoreError;
use almacen_db::DbError;
use almacen_report::ReportError;

use crate::config::ConfigError;

/// Caller-facing errors for app operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Business rule violation (insufficient stock, missing product,
    /// invalid input).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Database failure.
    #[error(transparent)]
    Db(DbError),

    /// Report artifact generation failure.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Email already registered. Surfaced as a user-visible message on
    /// the registration form, not fatal.
    #[error("El correo ya está registrado: {0}")]
    DuplicateEmail(String),

    /// Wrong email or password. Deliberately does not say which.
    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    /// Password hashing failure (argon2 internal error).
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Database errors are lifted into their user-visible form where one
/// exists; everything else stays a database error.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field, value } if field.contains("email") => {
                AppError::DuplicateEmail(value)
            }
            other => AppError::Db(other),
        }
    }
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_lifted_from_db_error() {
        let db_err = DbError::duplicate("users.email", "paula@example.com");
        let app_err: AppError = db_err.into();
        assert!(matches!(app_err, AppError::DuplicateEmail(v) if v == "paula@example.com"));
    }

    #[test]
    fn test_other_db_errors_stay_db() {
        let db_err = DbError::not_found("Product", 7);
        let app_err: AppError = db_err.into();
        assert!(matches!(app_err, AppError::Db(DbError::NotFound { .. })));
    }
}
