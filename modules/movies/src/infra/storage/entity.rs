use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored shape of a movie document.
///
/// Keys are the names the movie schema exposes to `filter` and `sort`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieEntity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub plot: String,
    pub year: i64,
    #[serde(default)]
    pub runtime: i64,
    #[serde(default)]
    pub imdb_rating: f64,
    pub released: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub awards: AwardsEntity,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardsEntity {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub nominations: u32,
    #[serde(default)]
    pub text: String,
}
