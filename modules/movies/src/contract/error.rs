use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoviesError {
    #[error("Movie not found: {id}")]
    NotFound { id: String },

    #[error("Invalid query: {message}")]
    InvalidQuery { code: &'static str, message: String },

    #[error("Internal error")]
    Internal,
}

impl MoviesError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for MoviesError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            MovieNotFound { id } => Self::not_found(id),
            Query(e) => Self::InvalidQuery {
                code: e.code(),
                message: e.to_string(),
            },
            Storage { .. } => Self::internal(),
        }
    }
}
