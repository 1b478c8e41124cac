use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path},
    http::Uri,
    response::Json,
    Extension,
};
use modkit::{ListQuery, ProblemResponse};
use query_core::{
    build_collection_links, build_resource_links, links::wrap_resource, HalCollection, HalResource,
};
use tracing::info;

use crate::api::rest::{dto::MovieDto, error::map_domain_error};
use crate::config::MoviesConfig;
use crate::domain::service::Service;

/// Link settings shared by the movie handlers.
#[derive(Debug, Clone, Default)]
pub struct LinkSettings {
    pub public_url: String,
    pub known_collections: Vec<String>,
    pub collection: BTreeMap<String, String>,
    pub resource: BTreeMap<String, String>,
}

impl LinkSettings {
    pub fn from_config(cfg: &MoviesConfig) -> Self {
        Self {
            public_url: cfg.public_url.trim_end_matches('/').to_string(),
            known_collections: cfg.links.known_collections.clone(),
            collection: cfg.links.collection.clone(),
            resource: cfg.links.resource.clone(),
        }
    }

    /// Request URL as clients should see it: public prefix, path and query.
    fn full_url(&self, uri: &Uri) -> String {
        let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        format!("{}{}", self.public_url, path_and_query)
    }
}

/// List movies matching `filter`, ordered by `sort`, one page at a time
pub async fn list_movies(
    Extension(svc): Extension<Arc<Service>>,
    Extension(links): Extension<Arc<LinkSettings>>,
    OriginalUri(uri): OriginalUri,
    ListQuery(query): ListQuery,
) -> Result<Json<HalCollection<MovieDto>>, ProblemResponse> {
    info!("Listing movies with query: {:?}", query);

    let page = svc
        .list_movies(query.into())
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    let full_url = links.full_url(&uri);
    Ok(Json(build_collection_links(
        page.map_items(MovieDto::from),
        &full_url,
        &links.collection,
        &links.resource,
    )))
}

/// Get a specific movie by id
pub async fn get_movie(
    Extension(svc): Extension<Arc<Service>>,
    Extension(links): Extension<Arc<LinkSettings>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<HalResource<MovieDto>>, ProblemResponse> {
    info!("Getting movie with id: {}", id);

    let movie = svc
        .get_movie(&id)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    let full_url = links.full_url(&uri);
    let resource_links =
        build_resource_links(&full_url, &links.known_collections, &links.resource);
    Ok(Json(wrap_resource(MovieDto::from(movie), resource_links)))
}
