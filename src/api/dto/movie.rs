use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::dto::validation::{is_description, is_name};
use crate::domain::error::AppError;
use crate::domain::models::movie::{CreateMovie, Movie, MovieOrder, MovieSearch, UpdateMovie};

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDTO {
    #[schema(examples("x8c2kq0t3lq9m1v7a4zd"))]
    id: String,
    #[schema(examples("The Matrix"))]
    name: String,
    description: String,
    release_date: DateTime<Utc>,
    #[schema(examples(8.7))]
    rating: f32,
    actors: Vec<String>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateMovieDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("Inception"))]
    pub name: String,

    #[validate(custom(function = "is_description"))]
    #[schema(examples("A mind-bending action thriller"))]
    pub description: String,

    #[schema(examples("2010-07-16T00:00:00Z"))]
    pub release_date: DateTime<Utc>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    #[schema(examples(8.8))]
    pub rating: f32,

    #[serde(default)]
    pub actors: Vec<String>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpdateMovieDTO {
    #[validate(custom(function = "is_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "is_description"))]
    pub description: Option<String>,

    pub release_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f32>,

    pub actors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MovieOrderDTO {
    #[default]
    Rating,
    Name,
    ReleaseDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListQuery {
    /// Defaults to `rating` (best first).
    pub sort_by: Option<MovieOrderDTO>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchQuery {
    /// Fragment of the movie name.
    pub name: Option<String>,
    /// Fragment of an actor's name.
    pub actor: Option<String>,
}

impl From<Movie> for MovieDTO {
    fn from(val: Movie) -> Self {
        MovieDTO {
            id: val.id,
            name: val.name,
            description: val.description,
            release_date: val.release_date,
            rating: val.rating,
            actors: val.actors,
        }
    }
}

impl From<CreateMovieDTO> for CreateMovie {
    fn from(movie: CreateMovieDTO) -> Self {
        CreateMovie {
            name: movie.name,
            description: movie.description,
            release_date: movie.release_date,
            rating: movie.rating,
            actors: movie.actors,
        }
    }
}

impl From<UpdateMovieDTO> for UpdateMovie {
    fn from(changes: UpdateMovieDTO) -> Self {
        UpdateMovie {
            name: changes.name,
            description: changes.description,
            release_date: changes.release_date,
            rating: changes.rating,
            actors: changes.actors,
        }
    }
}

impl From<MovieOrderDTO> for MovieOrder {
    fn from(order: MovieOrderDTO) -> Self {
        match order {
            MovieOrderDTO::Rating => MovieOrder::Rating,
            MovieOrderDTO::Name => MovieOrder::Name,
            MovieOrderDTO::ReleaseDate => MovieOrder::ReleaseDate,
        }
    }
}

impl TryFrom<MovieSearchQuery> for MovieSearch {
    type Error = AppError;

    fn try_from(query: MovieSearchQuery) -> Result<Self, AppError> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        match (non_blank(query.name), non_blank(query.actor)) {
            (Some(name), None) => Ok(MovieSearch::Name(name)),
            (None, Some(actor)) => Ok(MovieSearch::Actor(actor)),
            _ => Err(AppError::BadRequest(
                "Exactly one of the 'name' or 'actor' parameters is required",
            )),
        }
    }
}
