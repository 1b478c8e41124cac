use async_trait::async_trait;
use query_core::Page;

use crate::contract::{
    error::MoviesError,
    model::{Movie, MovieListQuery},
};

/// Public API trait for the movies module that other modules can use
#[async_trait]
pub trait MoviesApi: Send + Sync {
    /// Get a movie by id
    async fn get_movie(&self, id: &str) -> Result<Movie, MoviesError>;

    /// List movies matching a filter, in sort order, one page at a time
    async fn list_movies(&self, query: MovieListQuery) -> Result<Page<Movie>, MoviesError>;
}
