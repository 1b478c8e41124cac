use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Movie not found: {id}")]
    MovieNotFound { id: String },

    #[error(transparent)]
    Query(#[from] query_core::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn movie_not_found(id: impl Into<String>) -> Self {
        Self::MovieNotFound { id: id.into() }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
