use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::movie::{CreateMovie, Movie, MovieSummary, UpdateMovie};
use crate::infrastructure::repositories::ACTOR;

#[derive(Debug, Deserialize)]
pub struct SurrealMovie {
    id: Thing,
    name: String,
    description: String,
    release_date: Datetime,
    rating: f32,
    #[serde(default)]
    actors: Vec<Thing>,
}

#[derive(Serialize)]
pub struct SurrealMovieContent {
    name: String,
    description: String,
    release_date: Datetime,
    rating: f32,
    actors: Vec<Thing>,
}

/// Partial document merged into an existing movie; absent fields are left alone.
#[derive(Serialize)]
pub struct SurrealMoviePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_date: Option<Datetime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actors: Option<Vec<Thing>>,
}

#[derive(Debug, Deserialize)]
pub struct SurrealMovieSummary {
    id: Thing,
    name: String,
}

pub fn actor_things(ids: &[String]) -> Vec<Thing> {
    ids.iter()
        .map(|id| Thing::from((ACTOR, id.as_str())))
        .collect()
}

impl From<CreateMovie> for SurrealMovieContent {
    fn from(movie: CreateMovie) -> Self {
        SurrealMovieContent {
            actors: actor_things(&movie.actors),
            name: movie.name,
            description: movie.description,
            release_date: movie.release_date.into(),
            rating: movie.rating,
        }
    }
}

impl From<UpdateMovie> for SurrealMoviePatch {
    fn from(changes: UpdateMovie) -> Self {
        SurrealMoviePatch {
            actors: changes.actors.as_deref().map(actor_things),
            name: changes.name,
            description: changes.description,
            release_date: changes.release_date.map(Into::into),
            rating: changes.rating,
        }
    }
}

impl From<SurrealMovie> for Movie {
    fn from(movie: SurrealMovie) -> Self {
        Movie {
            id: movie.id.id.to_string(),
            name: movie.name,
            description: movie.description,
            release_date: movie.release_date.0,
            rating: movie.rating,
            actors: movie
                .actors
                .into_iter()
                .map(|actor| actor.id.to_string())
                .collect(),
        }
    }
}

impl From<SurrealMovieSummary> for MovieSummary {
    fn from(movie: SurrealMovieSummary) -> Self {
        MovieSummary {
            id: movie.id.id.to_string(),
            name: movie.name,
        }
    }
}
