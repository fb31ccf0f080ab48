use async_trait::async_trait;

use crate::domain::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};

use super::repository::RepositoryResult;

#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn create(&self, new_actor: CreateActor) -> RepositoryResult<Actor>;
    async fn update(&self, id: &str, changes: UpdateActor) -> RepositoryResult<Option<Actor>>;
    async fn delete(&self, id: &str) -> RepositoryResult<bool>;
    async fn list_with_movies(&self) -> RepositoryResult<Vec<ActorWithMovies>>;
    /// Returns the ids among `ids` that have no actor record.
    async fn missing(&self, ids: &[String]) -> RepositoryResult<Vec<String>>;
}
