use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::movie::{CreateMovie, Movie, MovieOrder, MovieSearch, UpdateMovie};
use crate::domain::repositories::movie::MovieRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::movie::{SurrealMovie, SurrealMovieContent, SurrealMoviePatch};

use super::{ACTOR, MOVIE};

pub struct MovieRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

fn into_movies(movies: Vec<SurrealMovie>) -> Vec<Movie> {
    movies.into_iter().map(Into::into).collect()
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn create(&self, new_movie: CreateMovie) -> RepositoryResult<Movie> {
        let movie: Option<SurrealMovie> = self
            .db
            .create(MOVIE)
            .content(SurrealMovieContent::from(new_movie))
            .await?;

        movie
            .map(Into::into)
            .ok_or(RepositoryError::MissingRecord(MOVIE))
    }

    async fn update(&self, id: &str, changes: UpdateMovie) -> RepositoryResult<Option<Movie>> {
        let movie: Option<SurrealMovie> = self
            .db
            .update((MOVIE, id))
            .merge(SurrealMoviePatch::from(changes))
            .await?;

        Ok(movie.map(Into::into))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let movie: Option<SurrealMovie> = self.db.delete((MOVIE, id)).await?;

        Ok(movie.is_some())
    }

    async fn list(&self, order: MovieOrder) -> RepositoryResult<Vec<Movie>> {
        let movies: Vec<SurrealMovie> = self
            .db
            .query(format!("SELECT * FROM type::table($table) ORDER BY {order}"))
            .bind(("table", MOVIE))
            .await?
            .take(0)?;

        Ok(into_movies(movies))
    }

    async fn search(&self, search: MovieSearch) -> RepositoryResult<Vec<Movie>> {
        let movies: Vec<SurrealMovie> = match search {
            MovieSearch::Name(fragment) => self
                .db
                .query(
                    "SELECT * FROM type::table($table) \
                     WHERE string::contains(string::lowercase(name), string::lowercase($fragment)) \
                     ORDER BY rating DESC",
                )
                .bind(("table", MOVIE))
                .bind(("fragment", fragment))
                .await?
                .take(0)?,
            MovieSearch::Actor(fragment) => self
                .db
                .query(
                    "LET $cast = (SELECT VALUE id FROM type::table($actors) \
                     WHERE string::contains(string::lowercase(name), string::lowercase($fragment))); \
                     SELECT * FROM type::table($table) WHERE actors CONTAINSANY $cast ORDER BY rating DESC;",
                )
                .bind(("table", MOVIE))
                .bind(("actors", ACTOR))
                .bind(("fragment", fragment))
                .await?
                .take(1)?,
        };

        Ok(into_movies(movies))
    }
}
