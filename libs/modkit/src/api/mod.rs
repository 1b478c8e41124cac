//! HTTP boundary helpers shared by catalog modules.

pub mod problem;
pub mod query;

pub use problem::{bad_request, Problem, ProblemResponse};
pub use query::{query_error_to_problem, ListParams, ListQuery};
