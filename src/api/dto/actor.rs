use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::validation::{is_gender, is_name};
use crate::domain::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};
use crate::domain::models::movie::MovieSummary;

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorDTO {
    #[schema(examples("p3k9d0w1c7x2e5r8t4ya"))]
    id: String,
    #[schema(examples("Keanu Reeves"))]
    name: String,
    #[schema(examples("male"))]
    gender: String,
    birthday: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSummaryDTO {
    id: String,
    #[schema(examples("The Matrix"))]
    name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorWithMoviesDTO {
    #[serde(flatten)]
    actor: ActorDTO,
    movies: Vec<MovieSummaryDTO>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateActorDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("Keanu Reeves"))]
    pub name: String,

    #[validate(custom(function = "is_gender"))]
    #[schema(examples("male"))]
    pub gender: String,

    #[schema(examples("1964-09-02T00:00:00Z"))]
    pub birthday: DateTime<Utc>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct UpdateActorDTO {
    #[validate(custom(function = "is_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "is_gender"))]
    pub gender: Option<String>,

    pub birthday: Option<DateTime<Utc>>,
}

impl From<Actor> for ActorDTO {
    fn from(val: Actor) -> Self {
        ActorDTO {
            id: val.id,
            name: val.name,
            gender: val.gender,
            birthday: val.birthday,
        }
    }
}

impl From<MovieSummary> for MovieSummaryDTO {
    fn from(val: MovieSummary) -> Self {
        MovieSummaryDTO {
            id: val.id,
            name: val.name,
        }
    }
}

impl From<ActorWithMovies> for ActorWithMoviesDTO {
    fn from(val: ActorWithMovies) -> Self {
        ActorWithMoviesDTO {
            actor: val.actor.into(),
            movies: val.movies.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateActorDTO> for CreateActor {
    fn from(actor: CreateActorDTO) -> Self {
        CreateActor {
            name: actor.name,
            gender: actor.gender,
            birthday: actor.birthday,
        }
    }
}

impl From<UpdateActorDTO> for UpdateActor {
    fn from(changes: UpdateActorDTO) -> Self {
        UpdateActor {
            name: changes.name,
            gender: changes.gender,
            birthday: changes.birthday,
        }
    }
}
