use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::error::AuthResult;
use crate::domain::models::token::TokenLifetime;
use crate::domain::repositories::actor::ActorRepository;
use crate::domain::repositories::movie::MovieRepository;
use crate::domain::repositories::user::UserRepository;
use crate::domain::services::actor::ActorService;
use crate::domain::services::movie::MovieService;
use crate::domain::services::token::TokenService;
use crate::domain::services::user::UserService;

use crate::services::actor::ActorServiceImpl;
use crate::services::movie::MovieServiceImpl;
use crate::services::token::JsonWebTokenServiceImpl;
use crate::services::user::UserServiceImpl;

use crate::infrastructure::repositories::actor::ActorRepositoryImpl;
use crate::infrastructure::repositories::movie::MovieRepositoryImpl;
use crate::infrastructure::repositories::user::UserRepositoryImpl;

pub struct Container {
    pub user_service: Arc<dyn UserService>,
    pub movie_service: Arc<dyn MovieService>,
    pub actor_service: Arc<dyn ActorService>,
    pub token_service: Arc<dyn TokenService>,
    pub token_lifetime: TokenLifetime,
}

impl Container {
    pub fn new(
        conn: Surreal<Client>,
        symmetric_key: &[u8],
        token_lifetime: TokenLifetime,
    ) -> AuthResult<Self> {
        let db = Arc::new(conn);

        let actor_repository: Arc<dyn ActorRepository> =
            Arc::new(ActorRepositoryImpl::new(db.clone()));

        Ok(Container {
            user_service: user_service(db.clone()),
            movie_service: movie_service(db.clone(), actor_repository.clone()),
            actor_service: Arc::new(ActorServiceImpl::new(actor_repository)),
            token_service: Arc::new(JsonWebTokenServiceImpl::new(symmetric_key)?),
            token_lifetime,
        })
    }
}

fn user_service(db: Arc<Surreal<Client>>) -> Arc<dyn UserService> {
    let user_repository: Arc<dyn UserRepository> = Arc::new(UserRepositoryImpl::new(db));

    Arc::new(UserServiceImpl::new(user_repository))
}

fn movie_service(
    db: Arc<Surreal<Client>>,
    actor_repository: Arc<dyn ActorRepository>,
) -> Arc<dyn MovieService> {
    let movie_repository: Arc<dyn MovieRepository> = Arc::new(MovieRepositoryImpl::new(db));

    Arc::new(MovieServiceImpl::new(movie_repository, actor_repository))
}
