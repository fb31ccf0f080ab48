use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{
    error::{AppError, AppResult},
    models::movie::{CreateMovie, Movie, MovieOrder, MovieSearch, UpdateMovie},
    repositories::{actor::ActorRepository, movie::MovieRepository},
    services::movie::MovieService,
};

pub struct MovieServiceImpl {
    movies: Arc<dyn MovieRepository>,
    actors: Arc<dyn ActorRepository>,
}

impl MovieServiceImpl {
    pub fn new(movies: Arc<dyn MovieRepository>, actors: Arc<dyn ActorRepository>) -> Self {
        Self { movies, actors }
    }

    async fn ensure_actors(&self, ids: &[String]) -> AppResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let missing = self.actors.missing(ids).await?;

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::UnprocessableEntity(format!(
                "Unknown actors: {}",
                missing.join(", ")
            )))
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Movie {id} does not exist"))
}

#[async_trait]
impl MovieService for MovieServiceImpl {
    async fn create(&self, new_movie: CreateMovie) -> AppResult<Movie> {
        self.ensure_actors(&new_movie.actors).await?;

        let movie = self.movies.create(new_movie).await?;

        info!(movie = %movie.id, "movie created");

        Ok(movie)
    }

    async fn update(&self, id: &str, changes: UpdateMovie) -> AppResult<Movie> {
        if let Some(actors) = &changes.actors {
            self.ensure_actors(actors).await?;
        }

        match self.movies.update(id, changes).await? {
            Some(movie) => Ok(movie),
            None => Err(not_found(id)),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        if self.movies.delete(id).await? {
            info!(movie = %id, "movie deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    async fn list(&self, order: MovieOrder) -> AppResult<Vec<Movie>> {
        Ok(self.movies.list(order).await?)
    }

    async fn search(&self, search: MovieSearch) -> AppResult<Vec<Movie>> {
        Ok(self.movies.search(search).await?)
    }
}
