use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};
use crate::infrastructure::models::movie::SurrealMovieSummary;

#[derive(Debug, Deserialize)]
pub struct SurrealActor {
    id: Thing,
    name: String,
    gender: String,
    birthday: Datetime,
}

#[derive(Serialize)]
pub struct SurrealActorContent {
    name: String,
    gender: String,
    birthday: Datetime,
}

#[derive(Serialize)]
pub struct SurrealActorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Datetime>,
}

#[derive(Debug, Deserialize)]
pub struct SurrealActorWithMovies {
    id: Thing,
    name: String,
    gender: String,
    birthday: Datetime,
    movies: Vec<SurrealMovieSummary>,
}

impl From<CreateActor> for SurrealActorContent {
    fn from(actor: CreateActor) -> Self {
        SurrealActorContent {
            name: actor.name,
            gender: actor.gender,
            birthday: actor.birthday.into(),
        }
    }
}

impl From<UpdateActor> for SurrealActorPatch {
    fn from(changes: UpdateActor) -> Self {
        SurrealActorPatch {
            name: changes.name,
            gender: changes.gender,
            birthday: changes.birthday.map(Into::into),
        }
    }
}

impl From<SurrealActor> for Actor {
    fn from(actor: SurrealActor) -> Self {
        Actor {
            id: actor.id.id.to_string(),
            name: actor.name,
            gender: actor.gender,
            birthday: actor.birthday.0,
        }
    }
}

impl From<SurrealActorWithMovies> for ActorWithMovies {
    fn from(row: SurrealActorWithMovies) -> Self {
        ActorWithMovies {
            actor: Actor {
                id: row.id.id.to_string(),
                name: row.name,
                gender: row.gender,
                birthday: row.birthday.0,
            },
            movies: row.movies.into_iter().map(Into::into).collect(),
        }
    }
}
