use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::order::UnknownOrderStatus;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised by the data store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("invalid stored data: {0}")]
    InvalidData(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::NotNullViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            other => RepositoryError::Database(other),
        }
    }
}

impl From<UnknownOrderStatus> for RepositoryError {
    fn from(err: UnknownOrderStatus) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}
