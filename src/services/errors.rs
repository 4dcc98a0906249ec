use thiserror::Error;

use crate::forms::FormError;
use crate::repository::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures reported by the service layer, one variant per response class.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field or query parameter is missing.
    #[error("{0}")]
    Validation(String),
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// The order transaction failed and was rolled back.
    #[error("order could not be created: {0}")]
    Transaction(#[source] RepositoryError),
    /// Any other data store failure.
    #[error("store failure: {0}")]
    Store(#[source] RepositoryError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Store(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
