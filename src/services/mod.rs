use thiserror::Error;

pub mod centers;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A submitted form failed validation.
    #[error("{0}")]
    Form(String),
    /// A business rule was violated.
    #[error("{0}")]
    Business(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// An optimistic-lock comparison failed.
    #[error("conflict: {0}")]
    Conflict(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
