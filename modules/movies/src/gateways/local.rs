use async_trait::async_trait;
use query_core::Page;
use std::sync::Arc;

use crate::contract::{
    client::MoviesApi,
    error::MoviesError,
    model::{Movie, MovieListQuery},
};
use crate::domain::service::Service;

/// Local implementation of the MoviesApi trait that delegates to the domain service
pub struct MoviesLocalClient {
    service: Arc<Service>,
}

impl MoviesLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MoviesApi for MoviesLocalClient {
    async fn get_movie(&self, id: &str) -> Result<Movie, MoviesError> {
        self.service.get_movie(id).await.map_err(Into::into)
    }

    async fn list_movies(&self, query: MovieListQuery) -> Result<Page<Movie>, MoviesError> {
        self.service.list_movies(query).await.map_err(Into::into)
    }
}
