use axum::http::StatusCode;
use query_core::Error as QueryError;

use crate::api::problem::{Problem, ProblemResponse};
use crate::api::query::{PAGE_PARAM, PAGE_SIZE_PARAM};

/// Map query compilation and paging errors to RFC 9457 Problem responses.
///
/// Compilation failures are client errors (400); out-of-range page
/// parameters are 422, mirroring how limits are validated elsewhere.
pub fn query_error_to_problem(e: &QueryError, instance: &str) -> ProblemResponse {
    tracing::debug!(code = e.code(), error = %e, "query rejected");

    let problem = match e {
        QueryError::InvalidField(_) => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Field", e.to_string())
        }
        QueryError::UnsupportedType { .. } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Unsupported Field Type",
            e.to_string(),
        ),
        QueryError::InvalidValue { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Value", e.to_string())
        }
        QueryError::InvalidPage => {
            Problem::new(StatusCode::UNPROCESSABLE_ENTITY, "Invalid Page", e.to_string())
                .with_parameter(PAGE_PARAM)
        }
        QueryError::InvalidPageSize => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid Page Size",
            e.to_string(),
        )
        .with_parameter(PAGE_SIZE_PARAM),
    };

    problem.with_code(e.code()).with_instance(instance).into()
}
