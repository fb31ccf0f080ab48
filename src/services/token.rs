use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{AuthError, AuthResult};
use crate::domain::models::token::{AccessToken, MIN_KEY_SIZE, Payload};
use crate::domain::services::token::TokenService;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Symmetric key material. Deliberately not `Debug`.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    pub fn from_secret(secret: &[u8]) -> AuthResult<Self> {
        if secret.len() < MIN_KEY_SIZE {
            return Err(AuthError::InvalidKeySize);
        }

        Ok(SigningKey {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct Claims {
    jti: Uuid,
    sub: String,
    role: String,
    iat: i64,
    exp: i64,
}

impl From<&Payload> for Claims {
    fn from(payload: &Payload) -> Self {
        Claims {
            jti: payload.id,
            sub: payload.subject.clone(),
            role: payload.role.clone(),
            iat: payload.issued_at.timestamp(),
            exp: payload.expires_at.timestamp(),
        }
    }
}

impl TryFrom<Claims> for Payload {
    type Error = AuthError;

    fn try_from(claims: Claims) -> AuthResult<Self> {
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;

        if claims.sub.is_empty() || claims.role.is_empty() {
            return Err(AuthError::InvalidTokenFormat);
        }

        Ok(Payload {
            id: claims.jti,
            subject: claims.sub,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(seconds: i64) -> AuthResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or(AuthError::InvalidTokenFormat)
}

/// Drops sub-second precision. A lifetime that truncates to zero would give
/// `issued_at == expires_at` and is refused; negative ones mint expired tokens.
fn whole_seconds(duration: Duration) -> AuthResult<Duration> {
    match Duration::try_seconds(duration.num_seconds()) {
        Some(lifetime) if !lifetime.is_zero() => Ok(lifetime),
        _ => Err(AuthError::InvalidTokenLifetime),
    }
}

pub struct JsonWebTokenServiceImpl {
    key: SigningKey,
    validation: Validation,
}

impl JsonWebTokenServiceImpl {
    pub fn new(secret: &[u8]) -> AuthResult<Self> {
        let key = SigningKey::from_secret(secret)?;

        // Only HS256 is accepted; the header's `alg` is checked against this
        // list. Expiry is checked by hand against the caller's clock.
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Ok(JsonWebTokenServiceImpl { key, validation })
    }

    pub fn create_token_at(
        &self,
        subject: &str,
        role: &str,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> AuthResult<AccessToken> {
        if subject.is_empty() || role.is_empty() {
            return Err(AuthError::SigningError(
                "subject and role must not be empty".to_string(),
            ));
        }

        // Claims carry whole seconds, so the payload does too.
        let lifetime = whole_seconds(duration)?;
        let issued_at = timestamp(now.timestamp())
            .map_err(|_| AuthError::SigningError("current time out of range".to_string()))?;
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .ok_or_else(|| AuthError::SigningError("token lifetime out of range".to_string()))?;

        let payload = Payload {
            id: Uuid::new_v4(),
            subject: subject.to_string(),
            role: role.to_string(),
            issued_at,
            expires_at,
        };

        let token = encode(
            &Header::new(ALGORITHM),
            &Claims::from(&payload),
            &self.key.encoding,
        )
        .map_err(|err| AuthError::SigningError(err.to_string()))?;

        Ok(AccessToken { token, payload })
    }

    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Payload> {
        let claims = decode::<Claims>(token, &self.key.decoding, &self.validation)
            .map_err(|error| match error.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidTokenFormat,
            })?
            .claims;

        let payload = Payload::try_from(claims)?;

        if payload.is_expired_at(now) {
            return Err(AuthError::ExpiredToken);
        }

        Ok(payload)
    }
}

impl TokenService for JsonWebTokenServiceImpl {
    fn create_token(
        &self,
        subject: &str,
        role: &str,
        duration: Duration,
    ) -> AuthResult<AccessToken> {
        self.create_token_at(subject, role, duration, Utc::now())
    }

    fn verify_token(&self, token: &str) -> AuthResult<Payload> {
        self.verify_token_at(token, Utc::now())
    }
}
