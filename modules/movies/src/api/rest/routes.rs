use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::api::rest::handlers::{self, LinkSettings};
use crate::domain::service::Service;

pub const MOVIES_PATH: &str = "/movies";
pub const MOVIE_PATH: &str = "/movies/{id}";

/// Mount the movie endpoints onto `router`.
pub fn register_routes(router: Router, service: Arc<Service>, links: Arc<LinkSettings>) -> Router {
    let movies = Router::new()
        .route(MOVIES_PATH, get(handlers::list_movies))
        .route(MOVIE_PATH, get(handlers::get_movie))
        .layer(Extension(service))
        .layer(Extension(links));

    router.merge(movies)
}
