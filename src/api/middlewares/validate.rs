use actix_web::dev::{JsonBody, Payload};
use actix_web::{FromRequest, HttpRequest};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::domain::error::AppError;

const PAYLOAD_LIMIT: usize = 32_768;

/// JSON body extractor that runs `validator` rules before the handler sees
/// the payload. Decoding failures are 400, rule violations 422.
///
/// Accepts `application/json` and structured `+json` types such as
/// `application/merge-patch+json`.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let path = req.path().to_owned();
        let body = JsonBody::<T>::new(req, payload, None, true).limit(PAYLOAD_LIMIT);

        async move {
            let value = body.await.map_err(|error| {
                debug!(path = %path, error = %error, "request body rejected");
                AppError::from(error)
            })?;

            if let Err(errors) = value.validate() {
                let fields: Vec<_> = errors.field_errors().into_keys().collect();
                debug!(path = %path, fields = ?fields, "request body failed validation");

                return Err(AppError::from(errors));
            }

            Ok(Json(value))
        }
        .boxed_local()
    }
}
