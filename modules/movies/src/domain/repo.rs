use crate::contract::model::Movie;
use async_trait::async_trait;
use query_core::{Page, PageRequest, Predicate, SortSpec};

/// Port for the domain layer: read operations the domain needs from storage.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait MoviesRepository: Send + Sync {
    /// Load a movie by id.
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Movie>>;

    /// Evaluate `filter` over the collection, order by `sort` and cut one page.
    ///
    /// The predicate and sort are already validated against the movie schema;
    /// the returned descriptor carries the total match count.
    async fn find_page(
        &self,
        filter: &Predicate,
        sort: &SortSpec,
        page: PageRequest,
    ) -> anyhow::Result<Page<Movie>>;
}
