//! Orders service errors.

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;
use validator::ValidationErrors;

/// Failures surfaced by order operations.
///
/// "No such order" is not an error: lookups return `Option` and deletes
/// return a boolean instead.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// One or more input fields broke a field rule. Raised before any
    /// storage access; carries a message per violated field.
    #[error("invalid order data: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for OrdersServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}
