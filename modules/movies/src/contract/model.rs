use chrono::{DateTime, Utc};

/// A catalog movie as seen by the domain and by other modules.
/// Transport-agnostic: no serde here, REST and storage have their own shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub plot: String,
    pub year: i64,
    /// Minutes.
    pub runtime: i64,
    pub imdb_rating: f64,
    pub released: DateTime<Utc>,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub directors: Vec<String>,
    pub languages: Vec<String>,
    pub awards: Awards,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Awards {
    pub wins: u32,
    pub nominations: u32,
    pub text: String,
}

/// Raw list request: grammar strings and paging as received from a caller.
#[derive(Debug, Clone, Default)]
pub struct MovieListQuery {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl From<modkit::ListParams> for MovieListQuery {
    fn from(p: modkit::ListParams) -> Self {
        Self {
            filter: p.filter,
            sort: p.sort,
            page: p.page,
            page_size: p.page_size,
        }
    }
}
