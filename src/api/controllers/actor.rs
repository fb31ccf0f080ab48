use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::{Authenticated, require_authentication};
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::token::role;
use crate::domain::services::actor::ActorService;

use crate::api::dto::actor::{ActorDTO, ActorWithMoviesDTO, CreateActorDTO, UpdateActorDTO};

use actix_web::{
    HttpResponse, delete, get,
    middleware::from_fn,
    patch, post,
    web::{Data as State, Path},
};

use utoipa_actix_web::{scope, service_config::ServiceConfig};

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/actors")
            .wrap(from_fn(require_authentication))
            .service(list)
            .service(create)
            .service(update)
            .service(remove),
    );
}

#[utoipa::path(
    responses(
        (status = 200, body = ActorDTO, description = "Actor Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateActorDTO,
    security(("jsonwebtoken" = [])),
    tag = "Actors",
)]
#[post("")]
pub async fn create(
    identity: Authenticated,
    payload: Json<CreateActorDTO>,
    actor_service: State<Arc<dyn ActorService>>,
) -> ApiResult {
    identity.require_role(role::ADMINISTRATOR)?;

    let actor = actor_service.create(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(ActorDTO::from(actor)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Actor identifier")),
    responses(
        (status = 200, body = ActorDTO, description = "Actor Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = UpdateActorDTO,
    security(("jsonwebtoken" = [])),
    tag = "Actors",
)]
#[patch("/{id}")]
pub async fn update(
    identity: Authenticated,
    id: Path<String>,
    payload: Json<UpdateActorDTO>,
    actor_service: State<Arc<dyn ActorService>>,
) -> ApiResult {
    identity.require_role(role::ADMINISTRATOR)?;

    let actor = actor_service
        .update(&id, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ActorDTO::from(actor)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Actor identifier")),
    responses(
        (status = 204, description = "Actor Deleted"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Actors",
)]
#[delete("/{id}")]
pub async fn remove(
    identity: Authenticated,
    id: Path<String>,
    actor_service: State<Arc<dyn ActorService>>,
) -> ApiResult {
    identity.require_role(role::ADMINISTRATOR)?;

    actor_service.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Every actor together with the movies they appear in.
#[utoipa::path(
    responses(
        (status = 200, body = Vec<ActorWithMoviesDTO>),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Actors",
)]
#[get("")]
pub async fn list(
    _identity: Authenticated,
    actor_service: State<Arc<dyn ActorService>>,
) -> ApiResult {
    let actors = actor_service.list_with_movies().await?;

    Ok(HttpResponse::Ok().json(
        actors
            .into_iter()
            .map(ActorWithMoviesDTO::from)
            .collect::<Vec<_>>(),
    ))
}
