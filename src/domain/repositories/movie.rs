use async_trait::async_trait;

use crate::domain::models::movie::{CreateMovie, Movie, MovieOrder, MovieSearch, UpdateMovie};

use super::repository::RepositoryResult;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, new_movie: CreateMovie) -> RepositoryResult<Movie>;
    async fn update(&self, id: &str, changes: UpdateMovie) -> RepositoryResult<Option<Movie>>;
    async fn delete(&self, id: &str) -> RepositoryResult<bool>;
    async fn list(&self, order: MovieOrder) -> RepositoryResult<Vec<Movie>>;
    async fn search(&self, search: MovieSearch) -> RepositoryResult<Vec<Movie>>;
}
