use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    response::Json,
    routing::get,
    Router,
};
use movies::MoviesModule;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{field::Empty, Span};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn x_request_id() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn request_span(req: &Request<Body>) -> tracing::Span {
    let rid = req
        .headers()
        .get(x_request_id())
        .and_then(|v| v.to_str().ok())
        .unwrap_or("n/a");
    tracing::info_span!(
        "http_request",
        method = %req.method(),
        uri = %req.uri().path(),
        version = ?req.version(),
        request_id = %rid,
        status = Empty,
        latency_ms = Empty
    )
}

fn record_response(res: &Response<Body>, latency: Duration, span: &Span) {
    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
    span.record("status", res.status().as_u16());
    span.record("latency_ms", latency_ms);
    tracing::debug!(parent: span, "finished processing request");
}

/// Assemble the HTTP surface: health, OpenAPI document and module routes.
///
/// Middleware (outermost first): set request id, propagate it to the
/// response, trace, timeout.
pub fn build_router(movies: &MoviesModule) -> anyhow::Result<Router> {
    let openapi = Arc::new(serde_json::to_value(
        movies::api::rest::openapi::openapi_doc(),
    )?);

    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json((*doc).clone()) }
            }),
        );
    let router = movies.register_rest(router);

    Ok(router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(x_request_id()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(request_span)
                    .on_response(record_response),
            )
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
    ))
}
