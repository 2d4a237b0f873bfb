//! Short links service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortLinksServiceError {
    #[error("short link not found")]
    NotFound,

    #[error("invalid long url: {0}")]
    Validation(String),

    #[error("no free token after {attempts} attempts")]
    ResourceExhausted { attempts: usize },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ShortLinksServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation) => {
                Self::Validation("long url rejected by the store".to_string())
            }
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
