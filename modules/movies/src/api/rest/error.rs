use axum::http::StatusCode;
use modkit::api::problem::{Problem, ProblemResponse};
use modkit::query_error_to_problem;

use crate::domain::error::DomainError;

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::MovieNotFound { id } => Problem::new(
            StatusCode::NOT_FOUND,
            "Movie not found",
            format!("Movie with id {id} was not found"),
        )
        .with_code("MOVIES_NOT_FOUND")
        .with_instance(instance)
        .into(),
        DomainError::Query(qe) => query_error_to_problem(qe, instance),
        DomainError::Storage { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Storage error occurred");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
                "An internal storage error occurred",
            )
            .with_code("MOVIES_INTERNAL")
            .with_instance(instance)
            .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404_with_code() {
        let resp = map_domain_error(&DomainError::movie_not_found("m1"), "/movies/m1");
        assert_eq!(resp.0.status, 404);
        assert_eq!(resp.0.code, "MOVIES_NOT_FOUND");
        assert_eq!(resp.0.instance, "/movies/m1");
    }

    #[test]
    fn query_errors_keep_their_codes() {
        let e = DomainError::from(query_core::Error::invalid_field("budget"));
        let resp = map_domain_error(&e, "/movies");
        assert_eq!(resp.0.status, 400);
        assert_eq!(resp.0.code, "QUERY_INVALID_FIELD");
    }

    #[test]
    fn storage_details_are_hidden() {
        let resp = map_domain_error(&DomainError::storage("disk on fire"), "/movies");
        assert_eq!(resp.0.status, 500);
        assert!(!resp.0.detail.contains("disk"));
    }
}
