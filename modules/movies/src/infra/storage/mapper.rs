use crate::contract::model::{Awards, Movie};
use crate::infra::storage::entity::{AwardsEntity, MovieEntity};

impl From<MovieEntity> for Movie {
    fn from(e: MovieEntity) -> Self {
        Self {
            id: e.id,
            title: e.title,
            plot: e.plot,
            year: e.year,
            runtime: e.runtime,
            imdb_rating: e.imdb_rating,
            released: e.released,
            genres: e.genres,
            cast: e.cast,
            directors: e.directors,
            languages: e.languages,
            awards: Awards {
                wins: e.awards.wins,
                nominations: e.awards.nominations,
                text: e.awards.text,
            },
        }
    }
}

impl From<&Movie> for MovieEntity {
    fn from(m: &Movie) -> Self {
        Self {
            id: m.id.clone(),
            title: m.title.clone(),
            plot: m.plot.clone(),
            year: m.year,
            runtime: m.runtime,
            imdb_rating: m.imdb_rating,
            released: m.released,
            genres: m.genres.clone(),
            cast: m.cast.clone(),
            directors: m.directors.clone(),
            languages: m.languages.clone(),
            awards: AwardsEntity {
                wins: m.awards.wins,
                nominations: m.awards.nominations,
                text: m.awards.text.clone(),
            },
        }
    }
}
