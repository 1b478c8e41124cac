use std::sync::Arc;

use query_core::{
    compile_filter, compile_sort, EntitySchema, Page, PageRequest, SortDir, SortSpec,
};
use tracing::{debug, instrument};

use crate::contract::model::{Movie, MovieListQuery};
use crate::domain::error::DomainError;
use crate::domain::repo::MoviesRepository;
use crate::domain::schema::movie_schema;

/// Domain service: compiles list requests against the movie schema and
/// delegates evaluation to the repository port.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn MoviesRepository>,
    schema: Arc<EntitySchema>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
    /// Applied when a request carries no sort expression.
    pub default_sort: SortSpec,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let mut default_sort = SortSpec::empty();
        default_sort.set("year", SortDir::Desc);
        Self {
            default_page_size: 20,
            max_page_size: 100,
            default_sort,
        }
    }
}

impl Service {
    pub fn new(repo: Arc<dyn MoviesRepository>, config: ServiceConfig) -> Self {
        Self {
            repo,
            schema: Arc::new(movie_schema()),
            config,
        }
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    #[instrument(name = "movies.service.get_movie", skip(self), fields(movie_id = %id))]
    pub async fn get_movie(&self, id: &str) -> Result<Movie, DomainError> {
        debug!("Getting movie by id");

        let movie = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::movie_not_found(id))?;
        debug!("Successfully retrieved movie");
        Ok(movie)
    }

    /// Compile filter and sort, resolve paging, then fetch one page.
    ///
    /// Nothing reaches the repository unless every part of the request
    /// compiles against the schema.
    #[instrument(
        name = "movies.service.list_movies",
        skip(self, query),
        fields(filter = ?query.filter, sort = ?query.sort)
    )]
    pub async fn list_movies(&self, query: MovieListQuery) -> Result<Page<Movie>, DomainError> {
        let predicate = compile_filter(&self.schema, query.filter.as_deref())?;

        let sort = compile_sort(query.sort.as_deref(), &self.config.default_sort);
        sort.validate(&self.schema)?;

        let page = PageRequest::resolve(
            query.page,
            query.page_size,
            self.config.default_page_size,
            self.config.max_page_size,
        )?;
        debug!(
            conditions = predicate.len(),
            sort = %sort.to_expression(),
            page = page.page,
            page_size = page.page_size,
            "Compiled list query"
        );

        let result = self
            .repo
            .find_page(&predicate, &sort, page)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        debug!(
            returned = result.items.len(),
            total = result.descriptor.total_count,
            "Listed movies"
        );
        Ok(result)
    }
}
