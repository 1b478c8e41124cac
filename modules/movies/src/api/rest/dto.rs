use chrono::{DateTime, Utc};
use query_core::Identified;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{Awards, Movie};

/// REST DTO for movie representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieDto {
    pub id: String,
    pub title: String,
    pub plot: String,
    pub year: i64,
    pub runtime: i64,
    pub imdb_rating: f64,
    pub released: DateTime<Utc>,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub directors: Vec<String>,
    pub languages: Vec<String>,
    pub awards: AwardsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AwardsDto {
    pub wins: u32,
    pub nominations: u32,
    pub text: String,
}

impl From<Movie> for MovieDto {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            plot: m.plot,
            year: m.year,
            runtime: m.runtime,
            imdb_rating: m.imdb_rating,
            released: m.released,
            genres: m.genres,
            cast: m.cast,
            directors: m.directors,
            languages: m.languages,
            awards: m.awards.into(),
        }
    }
}

impl From<Awards> for AwardsDto {
    fn from(a: Awards) -> Self {
        Self {
            wins: a.wins,
            nominations: a.nominations,
            text: a.text,
        }
    }
}

impl Identified for MovieDto {
    fn resource_id(&self) -> String {
        self.id.clone()
    }
}
