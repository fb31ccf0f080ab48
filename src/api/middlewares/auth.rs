use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Payload as RequestPayload, ServiceRequest, ServiceResponse};
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::middleware::Next;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use tracing::{debug, warn};

use crate::domain::error::{AppError, AuthError, AuthResult};
use crate::domain::models::token::Payload;
use crate::domain::services::token::TokenService;

const SCHEME: &str = "bearer";

fn credential(headers: &HeaderMap) -> AuthResult<&str> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?;

    let mut fields = header.split_whitespace();

    match (fields.next(), fields.next(), fields.next()) {
        (Some(scheme), Some(token), None) => {
            if scheme.eq_ignore_ascii_case(SCHEME) {
                Ok(token)
            } else {
                Err(AuthError::UnsupportedScheme)
            }
        }
        _ => Err(AuthError::MalformedCredential),
    }
}

/// Verifies the bearer token of a request and returns the identity it carries.
pub fn authenticate(headers: &HeaderMap, tokens: &dyn TokenService) -> AuthResult<Payload> {
    tokens.verify_token(credential(headers)?)
}

/// Gate for protected scopes: rejects the request unless it carries a valid
/// token, otherwise stores the token's [`Payload`] in the request extensions.
pub async fn require_authentication(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let tokens = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError().trace("TokenService is not defined"))?;

    match authenticate(req.headers(), tokens.get_ref().as_ref()) {
        Ok(payload) => {
            debug!(subject = %payload.subject, role = %payload.role, "request authenticated");
            req.extensions_mut().insert(payload);
        }
        Err(error) => {
            warn!(path = %req.path(), error = %error, "request rejected");
            return Err(AppError::from(error).into());
        }
    }

    next.call(req).await
}

/// Identity of an authenticated request, as stored by [`require_authentication`].
#[derive(Debug, Clone)]
pub struct Authenticated(pub Payload);

impl Authenticated {
    pub fn from_extensions(req: &HttpRequest) -> AuthResult<Self> {
        req.extensions()
            .get::<Payload>()
            .cloned()
            .map(Authenticated)
            .ok_or(AuthError::Unauthenticated)
    }

    pub fn payload(&self) -> &Payload {
        &self.0
    }

    pub fn require_role(&self, role: &str) -> AuthResult<()> {
        let payload = self.payload();

        payload.require_role(role).inspect_err(|_| {
            warn!(subject = %payload.subject, role = %payload.role, required = %role, "permission denied");
        })
    }
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Authenticated, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut RequestPayload) -> Self::Future {
        ready(Authenticated::from_extensions(req).map_err(AppError::from))
    }
}
