use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{
    error::{AppError, AppResult},
    models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor},
    repositories::actor::ActorRepository,
    services::actor::ActorService,
};

pub struct ActorServiceImpl {
    repository: Arc<dyn ActorRepository>,
}

impl ActorServiceImpl {
    pub fn new(repository: Arc<dyn ActorRepository>) -> Self {
        Self { repository }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Actor {id} does not exist"))
}

#[async_trait]
impl ActorService for ActorServiceImpl {
    async fn create(&self, new_actor: CreateActor) -> AppResult<Actor> {
        let actor = self.repository.create(new_actor).await?;

        info!(actor = %actor.id, "actor created");

        Ok(actor)
    }

    async fn update(&self, id: &str, changes: UpdateActor) -> AppResult<Actor> {
        self.repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        info!(actor = %id, "actor deleted");

        Ok(())
    }

    async fn list_with_movies(&self) -> AppResult<Vec<ActorWithMovies>> {
        Ok(self.repository.list_with_movies().await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::models::movie::{Movie, MovieSummary};
    use crate::infrastructure::repositories::actor::mock::ActorRepositoryImpl;
    use rstest::*;

    #[fixture]
    fn service() -> ActorServiceImpl {
        let repo = Arc::new(ActorRepositoryImpl {
            actors: Mutex::new(vec![Actor {
                id: "keanu".to_string(),
                name: "Keanu Reeves".to_string(),
                gender: "male".to_string(),
                birthday: Utc.with_ymd_and_hms(1964, 9, 2, 0, 0, 0).unwrap(),
            }]),
            movies: Mutex::new(vec![Movie {
                id: "matrix".to_string(),
                name: "The Matrix".to_string(),
                description: "A hacker learns the truth".to_string(),
                release_date: Utc.with_ymd_and_hms(1999, 3, 31, 0, 0, 0).unwrap(),
                rating: 8.7,
                actors: vec!["keanu".to_string()],
            }]),
        });

        ActorServiceImpl::new(repo)
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_actor(service: ActorServiceImpl) {
        let actor = service
            .create(CreateActor {
                name: "Sandra Bullock".to_string(),
                gender: "female".to_string(),
                birthday: Utc.with_ymd_and_hms(1964, 7, 26, 0, 0, 0).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(actor.name, "Sandra Bullock");
        assert!(!actor.id.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_actor(service: ActorServiceImpl) {
        let actor = service
            .update(
                "keanu",
                UpdateActor {
                    name: Some("Keanu Charles Reeves".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(actor.name, "Keanu Charles Reeves");
        assert_eq!(actor.gender, "male");
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_missing_actor(service: ActorServiceImpl) {
        let result = service.update("ghost", UpdateActor::default()).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::NotFound("Actor ghost does not exist")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_actor(service: ActorServiceImpl) {
        assert!(service.delete("keanu").await.is_ok());
        assert_eq!(service.delete("keanu").await.unwrap_err().code, 404);
    }

    #[rstest]
    #[tokio::test]
    async fn test_actors_with_movies(service: ActorServiceImpl) {
        let actors = service.list_with_movies().await.unwrap();

        assert_eq!(actors.len(), 1);
        assert_eq!(actors[0].actor.name, "Keanu Reeves");
        assert_eq!(
            actors[0].movies,
            vec![MovieSummary {
                id: "matrix".to_string(),
                name: "The Matrix".to_string(),
            }]
        );
    }
}
