//! sqlx error classification shared by the PostgreSQL stores.

use authgate_core::error::{AppError, ErrorKind};

/// Map a driver error onto the store error taxonomy, keeping it as the source.
pub(crate) fn classify(err: sqlx::Error, context: &str) -> AppError {
    let kind = classify_kind(&err);
    let message = match kind {
        ErrorKind::AlreadyExists => format!("{context}: already exists"),
        ErrorKind::InvalidData => format!("{context}: invalid data"),
        ErrorKind::NotFound => format!("{context}: not found"),
        _ => format!("{context}: {err}"),
    };
    AppError::with_source(kind, message, err)
}

fn classify_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::Database(db_err) => match db_err.kind() {
            sqlx::error::ErrorKind::UniqueViolation => ErrorKind::AlreadyExists,
            sqlx::error::ErrorKind::CheckViolation
            | sqlx::error::ErrorKind::ForeignKeyViolation
            | sqlx::error::ErrorKind::NotNullViolation => ErrorKind::InvalidData,
            _ => ErrorKind::Store,
        },
        _ => ErrorKind::Store,
    }
}
