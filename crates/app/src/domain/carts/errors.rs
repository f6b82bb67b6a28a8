//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Validation failures raised while deserializing request payloads.
///
/// Parsing is staged: a payload is validated in full before any value is
/// constructed, so a validation failure never leaves a partially-mutated
/// entity behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent from the payload.
    #[error("body must contain '{0}'")]
    MissingField(String),

    /// A field was present but its value is not usable.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// A field could not be coerced to its declared type.
    #[error("invalid data type: {0}")]
    InvalidType(String),

    /// The request body was not a mapping of the expected shape.
    #[error("body of request contained bad or no data: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart or item not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
