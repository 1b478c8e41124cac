use std::ops::Deref;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::api::problem::bad_request;

pub use query_core::links::{PAGE_PARAM, PAGE_SIZE_PARAM};

pub mod error;
pub use error::query_error_to_problem;

pub const FILTER_PARAM: &str = "filter";
pub const SORT_PARAM: &str = "sort";

pub const INVALID_PARAMETERS_CODE: &str = "QUERY_INVALID_PARAMETERS";
pub const FILTER_TOO_LONG_CODE: &str = "QUERY_FILTER_TOO_LONG";
pub const SORT_TOO_LONG_CODE: &str = "QUERY_SORT_TOO_LONG";

pub const MAX_FILTER_LEN: usize = 8 * 1024;
pub const MAX_SORT_LEN: usize = 1024;

/// Raw list parameters as they appear on the query string.
///
/// Only presence and size are checked here; the grammar is compiled by the
/// owning module against its schema.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
}

/// Extract and bound-check list parameters from request parts.
pub async fn extract_list_params<S>(
    parts: &mut Parts,
    state: &S,
) -> Result<ListParams, crate::api::problem::ProblemResponse>
where
    S: Send + Sync,
{
    let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
        .await
        .map_err(|e| {
            bad_request(
                INVALID_PARAMETERS_CODE,
                format!("invalid query parameters: {}", e.body_text()),
            )
        })?;

    if params.filter.as_ref().is_some_and(|f| f.len() > MAX_FILTER_LEN) {
        let problem = bad_request(FILTER_TOO_LONG_CODE, "Filter too long").0;
        return Err(problem.with_parameter(FILTER_PARAM).into());
    }
    if params.sort.as_ref().is_some_and(|s| s.len() > MAX_SORT_LEN) {
        let problem = bad_request(SORT_TOO_LONG_CODE, "Sort too long").0;
        return Err(problem.with_parameter(SORT_PARAM).into());
    }

    Ok(params)
}

/// Axum extractor for `filter`, `sort`, `page` and `pageSize`.
/// Usage in handlers:
///   async fn list_movies(ListQuery(params): ListQuery, /* ... */) { /* use `params` */ }
#[derive(Debug, Clone)]
pub struct ListQuery(pub ListParams);

impl ListQuery {
    #[inline]
    pub fn into_inner(self) -> ListParams {
        self.0
    }
}

impl Deref for ListQuery {
    type Target = ListParams;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = crate::api::problem::ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let params = extract_list_params(parts, state).await?;
            Ok(ListQuery(params))
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
