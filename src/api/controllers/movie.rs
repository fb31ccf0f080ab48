use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::{Authenticated, require_authentication};
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::movie::{Movie, MovieSearch};
use crate::domain::models::token::role;
use crate::domain::services::movie::MovieService;

use crate::api::dto::movie::{
    CreateMovieDTO, MovieDTO, MovieListQuery, MovieSearchQuery, UpdateMovieDTO,
};

use actix_web::{
    HttpResponse, delete, get,
    middleware::from_fn,
    patch, post,
    web::{Data as State, Path, Query},
};

use utoipa_actix_web::{scope, service_config::ServiceConfig};

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/movies")
            .wrap(from_fn(require_authentication))
            .service(search)
            .service(list)
            .service(create)
            .service(update)
            .service(remove),
    );
}

fn dtos(movies: Vec<Movie>) -> Vec<MovieDTO> {
    movies.into_iter().map(MovieDTO::from).collect()
}

#[utoipa::path(
    responses(
        (status = 200, body = MovieDTO, description = "Movie Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CreateMovieDTO,
    security(("jsonwebtoken" = [])),
    tag = "Movies",
)]
#[post("")]
pub async fn create(
    identity: Authenticated,
    payload: Json<CreateMovieDTO>,
    movie_service: State<Arc<dyn MovieService>>,
) -> ApiResult {
    identity.require_role(role::ADMINISTRATOR)?;

    let movie = movie_service.create(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(MovieDTO::from(movie)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Movie identifier")),
    responses(
        (status = 200, body = MovieDTO, description = "Movie Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = UpdateMovieDTO,
    security(("jsonwebtoken" = [])),
    tag = "Movies",
)]
#[patch("/{id}")]
pub async fn update(
    identity: Authenticated,
    id: Path<String>,
    payload: Json<UpdateMovieDTO>,
    movie_service: State<Arc<dyn MovieService>>,
) -> ApiResult {
    identity.require_role(role::ADMINISTRATOR)?;

    let movie = movie_service
        .update(&id, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(MovieDTO::from(movie)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Movie identifier")),
    responses(
        (status = 204, description = "Movie Deleted"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Movies",
)]
#[delete("/{id}")]
pub async fn remove(
    identity: Authenticated,
    id: Path<String>,
    movie_service: State<Arc<dyn MovieService>>,
) -> ApiResult {
    identity.require_role(role::ADMINISTRATOR)?;

    movie_service.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    params(MovieListQuery),
    responses(
        (status = 200, body = Vec<MovieDTO>),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Movies",
)]
#[get("")]
pub async fn list(
    _identity: Authenticated,
    query: Query<MovieListQuery>,
    movie_service: State<Arc<dyn MovieService>>,
) -> ApiResult {
    let order = query.into_inner().sort_by.unwrap_or_default();

    let movies = movie_service.list(order.into()).await?;

    Ok(HttpResponse::Ok().json(dtos(movies)))
}

#[utoipa::path(
    params(MovieSearchQuery),
    responses(
        (status = 200, body = Vec<MovieDTO>),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Movies",
)]
#[get("/search")]
pub async fn search(
    _identity: Authenticated,
    query: Query<MovieSearchQuery>,
    movie_service: State<Arc<dyn MovieService>>,
) -> ApiResult {
    let search = MovieSearch::try_from(query.into_inner())?;

    let movies = movie_service.search(search).await?;

    Ok(HttpResponse::Ok().json(dtos(movies)))
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App,
        dev::ServiceResponse,
        http::{StatusCode, header::AUTHORIZATION},
        test::{self, TestRequest},
        web,
    };
    use chrono::{TimeZone, Utc};
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tokio::sync::Mutex;
    use utoipa_actix_web::AppExt;

    use super::*;
    use crate::domain::error::message;
    use crate::domain::models::actor::Actor;
    use crate::domain::services::token::TokenService;
    use crate::infrastructure::repositories::actor::mock::ActorRepositoryImpl;
    use crate::infrastructure::repositories::movie::mock::MovieRepositoryImpl;
    use crate::services::movie::MovieServiceImpl;
    use crate::tests::utils::keys::{bearer, token_service};

    use rstest::*;

    #[derive(Debug, Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    #[derive(Debug, Deserialize)]
    struct MovieBody {
        id: String,
        name: String,
        rating: f32,
        actors: Vec<String>,
    }

    fn movie_service() -> Arc<dyn MovieService> {
        let actors = Arc::new(ActorRepositoryImpl {
            actors: Mutex::new(vec![Actor {
                id: "keanu".to_string(),
                name: "Keanu Reeves".to_string(),
                gender: "male".to_string(),
                birthday: Utc.with_ymd_and_hms(1964, 9, 2, 0, 0, 0).unwrap(),
            }]),
            movies: Mutex::new(vec![]),
        });

        let movies = Arc::new(MovieRepositoryImpl {
            movies: Mutex::new(vec![
                Movie {
                    id: "matrix".to_string(),
                    name: "The Matrix".to_string(),
                    description: "A hacker learns the truth".to_string(),
                    release_date: Utc.with_ymd_and_hms(1999, 3, 31, 0, 0, 0).unwrap(),
                    rating: 8.7,
                    actors: vec!["keanu".to_string()],
                },
                Movie {
                    id: "speed".to_string(),
                    name: "Speed".to_string(),
                    description: "A bus that cannot slow down".to_string(),
                    release_date: Utc.with_ymd_and_hms(1994, 6, 10, 0, 0, 0).unwrap(),
                    rating: 7.3,
                    actors: vec!["keanu".to_string()],
                },
            ]),
            actors: actors.clone(),
        });

        Arc::new(MovieServiceImpl::new(movies, actors))
    }

    async fn send(req: TestRequest, role: Option<&str>) -> ServiceResponse {
        let tokens: Arc<dyn TokenService> = Arc::new(token_service());

        let app = test::init_service(
            App::new()
                .into_utoipa_app()
                .configure(routes)
                .into_app()
                .app_data(web::Data::new(tokens))
                .app_data(web::Data::new(movie_service())),
        )
        .await;

        let req = match role {
            Some(role) => req.insert_header((AUTHORIZATION, bearer("vkuser", role))),
            None => req,
        };

        req.send_request(&app).await
    }

    fn new_movie() -> Value {
        json!({
            "name": "John Wick",
            "description": "A retired hitman",
            "release_date": "2014-10-24T00:00:00Z",
            "rating": 7.4,
            "actors": ["keanu"]
        })
    }

    #[actix_web::test]
    async fn test_list_requires_token() {
        let res = send(TestRequest::get().uri("/movies"), None).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.message, message::MISSING_CREDENTIAL);
    }

    #[rstest]
    #[case::default("/movies", ["The Matrix", "Speed"])]
    #[case::rating("/movies?sort_by=rating", ["The Matrix", "Speed"])]
    #[case::name("/movies?sort_by=name", ["Speed", "The Matrix"])]
    #[case::release_date("/movies?sort_by=release_date", ["The Matrix", "Speed"])]
    #[actix_web::test]
    async fn test_client_lists_movies(#[case] uri: &str, #[case] expected: [&str; 2]) {
        let res = send(TestRequest::get().uri(uri), Some(role::CLIENT)).await;

        assert_eq!(res.status(), StatusCode::OK);

        let movies: Vec<MovieBody> = test::read_body_json(res).await;
        let names: Vec<String> = movies.into_iter().map(|m| m.name).collect();
        assert_eq!(names, expected);
    }

    #[actix_web::test]
    async fn test_unknown_sort_order() {
        let res = send(
            TestRequest::get().uri("/movies?sort_by=budget"),
            Some(role::CLIENT),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[case::name("/movies/search?name=matr", StatusCode::OK)]
    #[case::actor("/movies/search?actor=reeves", StatusCode::OK)]
    #[case::both("/movies/search?name=matr&actor=reeves", StatusCode::BAD_REQUEST)]
    #[case::neither("/movies/search", StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn test_search_movies(#[case] uri: &str, #[case] expected: StatusCode) {
        let res = send(TestRequest::get().uri(uri), Some(role::CLIENT)).await;

        assert_eq!(res.status(), expected);
    }

    #[actix_web::test]
    async fn test_client_cannot_create() {
        let res = send(
            TestRequest::post().uri("/movies").set_json(new_movie()),
            Some(role::CLIENT),
        )
        .await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 403);
        assert_eq!(err.message, message::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_administrator_creates() {
        let res = send(
            TestRequest::post().uri("/movies").set_json(new_movie()),
            Some(role::ADMINISTRATOR),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);

        let movie: MovieBody = test::read_body_json(res).await;
        assert!(!movie.id.is_empty());
        assert_eq!(movie.name, "John Wick");
        assert_eq!(movie.actors, vec!["keanu".to_string()]);
    }

    #[rstest]
    #[case::rating_too_high(json!({ "rating": 11.0 }), "Rating must be between 0 and 10")]
    #[case::blank_name(json!({ "name": "   " }), "Name must contain between 1 and 150 characters")]
    #[actix_web::test]
    async fn test_invalid_update(#[case] changes: Value, #[case] expected: &str) {
        let res = send(
            TestRequest::patch().uri("/movies/speed").set_json(changes),
            Some(role::ADMINISTRATOR),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert!(err.message.contains(expected));
    }

    #[actix_web::test]
    async fn test_administrator_updates() {
        let res = send(
            TestRequest::patch()
                .uri("/movies/speed")
                .set_json(json!({ "rating": 7.5 })),
            Some(role::ADMINISTRATOR),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);

        let movie: MovieBody = test::read_body_json(res).await;
        assert_eq!(movie.name, "Speed");
        assert_eq!(movie.rating, 7.5);
    }

    #[rstest]
    #[case::client(role::CLIENT, "/movies/speed", StatusCode::FORBIDDEN)]
    #[case::administrator(role::ADMINISTRATOR, "/movies/speed", StatusCode::NO_CONTENT)]
    #[case::missing(role::ADMINISTRATOR, "/movies/missing", StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn test_delete(#[case] role: &str, #[case] uri: &str, #[case] expected: StatusCode) {
        let res = send(TestRequest::delete().uri(uri), Some(role)).await;

        assert_eq!(res.status(), expected);
    }
}
