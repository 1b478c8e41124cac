//! # ModKit
//!
//! Boundary toolkit for catalog modules: RFC 9457 problem responses, the
//! list-parameter extractor (`filter`, `sort`, `page`, `pageSize`) and the
//! mapping from query errors to problems.

pub mod api;

pub use api::problem::{bad_request, Problem, ProblemResponse};
pub use api::query::{query_error_to_problem, ListParams, ListQuery};
