use chrono::{Duration, Utc};

use crate::domain::services::token::TokenService;
use crate::services::token::JsonWebTokenServiceImpl;

pub const SIGNING_KEY: &[u8] = b"test-signing-key-with-at-least-32-bytes";

pub const OTHER_SIGNING_KEY: &[u8] = b"another-signing-key-of-sufficient-length";

pub fn token_service() -> JsonWebTokenServiceImpl {
    JsonWebTokenServiceImpl::new(SIGNING_KEY).unwrap()
}

pub fn bearer(subject: &str, role: &str) -> String {
    let access_token = token_service()
        .create_token(subject, role, Duration::minutes(15))
        .unwrap();

    format!("Bearer {}", access_token.token)
}

/// A correctly signed token whose 15 minute lifetime ended a minute ago.
pub fn expired_bearer(subject: &str, role: &str) -> String {
    let access_token = token_service()
        .create_token_at(
            subject,
            role,
            Duration::minutes(15),
            Utc::now() - Duration::minutes(16),
        )
        .unwrap();

    format!("Bearer {}", access_token.token)
}
