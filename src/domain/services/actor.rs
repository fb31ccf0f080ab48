use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};

#[async_trait]
pub trait ActorService: 'static + Sync + Send {
    async fn create(&self, new_actor: CreateActor) -> AppResult<Actor>;
    async fn update(&self, id: &str, changes: UpdateActor) -> AppResult<Actor>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn list_with_movies(&self) -> AppResult<Vec<ActorWithMovies>>;
}
