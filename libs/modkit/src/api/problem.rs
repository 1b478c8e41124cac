use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Base for `type` URIs of catalog problems.
pub const PROBLEM_TYPE_BASE: &str = "https://errors.catalog.local";

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    title = "Problem",
    description = "RFC 9457 Problem Details for HTTP APIs"
)]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: String,
    /// Machine-readable error code, e.g. `QUERY_INVALID_FIELD`.
    pub code: String,
    /// Offending query parameter, when the problem comes from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            parameter: None,
        }
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    /// Set the code and derive `type` from it.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self.type_url = format!("{PROBLEM_TYPE_BASE}/{}", self.code);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameter = Some(name.into());
        self
    }
}

/// Axum response wrapper that renders `Problem` with correct status & content type.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self(p)
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut resp = axum::Json(self.0).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

/// 400 Problem whose `type` is derived from `code`.
pub fn bad_request(code: &str, detail: impl Into<String>) -> ProblemResponse {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
        .with_code(code)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_into_response_sets_status_and_content_type() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Bad Request", "invalid filter");
        let resp = ProblemResponse(p).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn problem_builder_pattern() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Invalid Field", "invalid field: budget")
            .with_code("QUERY_INVALID_FIELD")
            .with_instance("/movies")
            .with_parameter("filter");

        assert_eq!(p.status, 400);
        assert_eq!(p.code, "QUERY_INVALID_FIELD");
        assert_eq!(p.type_url, "https://errors.catalog.local/QUERY_INVALID_FIELD");
        assert_eq!(p.instance, "/movies");
        assert_eq!(p.parameter.as_deref(), Some("filter"));
    }

    #[test]
    fn parameter_is_omitted_when_absent() {
        let p = Problem::new(StatusCode::NOT_FOUND, "Not Found", "no such movie");
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("parameter").is_none());
        assert_eq!(json["type"], "about:blank");
    }

    #[test]
    fn bad_request_carries_code_and_type() {
        let resp = bad_request("QUERY_FILTER_TOO_LONG", "Filter too long");
        assert_eq!(resp.0.status, 400);
        assert_eq!(resp.0.code, "QUERY_FILTER_TOO_LONG");
        assert_eq!(
            resp.0.type_url,
            "https://errors.catalog.local/QUERY_FILTER_TOO_LONG"
        );
    }
}
