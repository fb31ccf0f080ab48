use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::movie::{CreateMovie, Movie, MovieOrder, MovieSearch, UpdateMovie};

#[async_trait]
pub trait MovieService: 'static + Sync + Send {
    async fn create(&self, new_movie: CreateMovie) -> AppResult<Movie>;
    async fn update(&self, id: &str, changes: UpdateMovie) -> AppResult<Movie>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn list(&self, order: MovieOrder) -> AppResult<Vec<Movie>>;
    async fn search(&self, search: MovieSearch) -> AppResult<Vec<Movie>>;
}
