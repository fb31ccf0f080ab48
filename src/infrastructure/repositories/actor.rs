use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;
use surrealdb::sql::Thing;

use crate::domain::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};
use crate::domain::repositories::actor::ActorRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::actor::{
    SurrealActor, SurrealActorContent, SurrealActorPatch, SurrealActorWithMovies,
};
use crate::infrastructure::models::movie::actor_things;

use super::{ACTOR, MOVIE};

pub struct ActorRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl ActorRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActorRepository for ActorRepositoryImpl {
    async fn create(&self, new_actor: CreateActor) -> RepositoryResult<Actor> {
        let actor: Option<SurrealActor> = self
            .db
            .create(ACTOR)
            .content(SurrealActorContent::from(new_actor))
            .await?;

        actor
            .map(Into::into)
            .ok_or(RepositoryError::MissingRecord(ACTOR))
    }

    async fn update(&self, id: &str, changes: UpdateActor) -> RepositoryResult<Option<Actor>> {
        let actor: Option<SurrealActor> = self
            .db
            .update((ACTOR, id))
            .merge(SurrealActorPatch::from(changes))
            .await?;

        Ok(actor.map(Into::into))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        // Unlink the actor from every movie before removing the record.
        let deleted: Vec<SurrealActor> = self
            .db
            .query(
                "LET $actor = type::thing($table, $id); \
                 UPDATE type::table($movies) SET actors -= $actor WHERE actors CONTAINS $actor; \
                 DELETE $actor RETURN BEFORE;",
            )
            .bind(("table", ACTOR))
            .bind(("movies", MOVIE))
            .bind(("id", id.to_owned()))
            .await?
            .take(2)?;

        Ok(!deleted.is_empty())
    }

    async fn list_with_movies(&self) -> RepositoryResult<Vec<ActorWithMovies>> {
        let actors: Vec<SurrealActorWithMovies> = self
            .db
            .query(
                "SELECT *, \
                 (SELECT id, name FROM type::table($movies) WHERE actors CONTAINS $parent.id ORDER BY name) AS movies \
                 FROM type::table($table) ORDER BY name",
            )
            .bind(("table", ACTOR))
            .bind(("movies", MOVIE))
            .await?
            .take(0)?;

        Ok(actors.into_iter().map(Into::into).collect())
    }

    async fn missing(&self, ids: &[String]) -> RepositoryResult<Vec<String>> {
        let found: Vec<Thing> = self
            .db
            .query("SELECT VALUE id FROM type::table($table) WHERE id IN $ids")
            .bind(("table", ACTOR))
            .bind(("ids", actor_things(ids)))
            .await?
            .take(0)?;

        let found: Vec<String> = found.into_iter().map(|thing| thing.id.to_string()).collect();

        Ok(ids
            .iter()
            .filter(|id| !found.contains(id))
            .cloned()
            .collect())
    }
}
