use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use query_core::{Page, PageRequest, Predicate, SortSpec};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::contract::model::Movie;
use crate::domain::repo::MoviesRepository;
use crate::infra::storage::entity::MovieEntity;
use crate::infra::storage::matcher::{compare_documents, CompiledFilter, Document};

struct StoredMovie {
    movie: Movie,
    doc: Document,
}

impl StoredMovie {
    fn new(movie: Movie) -> Result<Self> {
        let doc = match serde_json::to_value(MovieEntity::from(&movie))? {
            JsonValue::Object(map) => map,
            other => anyhow::bail!("movie {} serialized to non-object {other}", movie.id),
        };
        Ok(Self { movie, doc })
    }
}

/// Document collection kept in memory, in insertion order.
///
/// Predicates are evaluated against the JSON form of each movie, the same
/// shape a document store would hold.
#[derive(Default)]
pub struct InMemoryMoviesRepository {
    movies: RwLock<Vec<StoredMovie>>,
}

impl InMemoryMoviesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Result<Self> {
        let repo = Self::new();
        for movie in movies {
            repo.upsert(movie)?;
        }
        Ok(repo)
    }

    /// Load a JSON array of movie documents.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read fixtures {}", path.display()))?;
        let entities: Vec<MovieEntity> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid movie fixtures in {}", path.display()))?;
        let repo = Self::with_movies(entities.into_iter().map(Movie::from))?;
        info!(count = repo.len(), path = %path.display(), "Loaded movie fixtures");
        Ok(repo)
    }

    /// Insert a movie, replacing any stored movie with the same id in place.
    pub fn upsert(&self, movie: Movie) -> Result<()> {
        let stored = StoredMovie::new(movie)?;
        let mut movies = self.movies.write();
        match movies.iter_mut().find(|m| m.movie.id == stored.movie.id) {
            Some(existing) => *existing = stored,
            None => movies.push(stored),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }
}

#[async_trait]
impl MoviesRepository for InMemoryMoviesRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>> {
        Ok(self
            .movies
            .read()
            .iter()
            .find(|m| m.movie.id == id)
            .map(|m| m.movie.clone()))
    }

    async fn find_page(
        &self,
        filter: &Predicate,
        sort: &SortSpec,
        page: PageRequest,
    ) -> Result<Page<Movie>> {
        let filter = CompiledFilter::compile(filter).context("filter pattern failed to compile")?;

        let movies = self.movies.read();
        let mut matched: Vec<&StoredMovie> =
            movies.iter().filter(|m| filter.matches(&m.doc)).collect();
        // Stable: ties keep insertion order.
        matched.sort_by(|a, b| compare_documents(sort, &a.doc, &b.doc));

        let total = matched.len() as u64;
        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items: Vec<Movie> = matched
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|m| m.movie.clone())
            .collect();

        debug!(total, returned = items.len(), "Evaluated movie query");
        Ok(Page::new(items, page.describe(total)))
    }
}
