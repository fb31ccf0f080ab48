use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::token::TokenLifetime;
use crate::domain::services::token::TokenService;
use crate::domain::services::user::UserService;

use crate::api::dto::user::{CreateUserDTO, CredentialsDTO, LoginDTO, UserDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use tracing::info;
use utoipa_actix_web::{scope, service_config::ServiceConfig};

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/users").service(signup).service(login));
}

#[utoipa::path(
    responses(
        (status = 200, body = UserDTO, description = "User Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateUserDTO,
    tag = "Users",
)]
#[post("")]
pub async fn signup(
    payload: Json<CreateUserDTO>,
    user_service: State<Arc<dyn UserService>>,
) -> ApiResult {
    let user_dto = payload.into_inner();

    let created_user = user_service.signup(user_dto.into()).await?;

    Ok(HttpResponse::Ok().json(UserDTO::from(created_user)))
}

#[utoipa::path(
    responses(
        (status = 200, body = LoginDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Users"
)]
#[post("/login")]
pub async fn login(
    payload: Json<CredentialsDTO>,
    user_service: State<Arc<dyn UserService>>,
    token_service: State<Arc<dyn TokenService>>,
    lifetime: State<TokenLifetime>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    let user = user_service.signin(credentials_dto.into()).await?;

    let access_token = token_service.create_token(&user.username, &user.role, lifetime.0)?;

    info!(username = %user.username, role = %user.role, "user logged in");

    Ok(HttpResponse::Ok().json(LoginDTO::new(access_token, user)))
}
