use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::error::{AuthError, AuthResult};

/// Shortest symmetric signing key accepted by the token service, in bytes.
pub const MIN_KEY_SIZE: usize = 32;

/// Role identifiers known to the catalog. Roles stay open strings, these are
/// only the values the service itself hands out.
pub mod role {
    pub const ADMINISTRATOR: &str = "administrator";
    pub const CLIENT: &str = "client";
}

/// Identity claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub id: Uuid,
    pub subject: String,
    pub role: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Payload {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Exact comparison, no case folding or aliasing.
    pub fn require_role(&self, required: &str) -> AuthResult<()> {
        if self.role == required {
            Ok(())
        } else {
            Err(AuthError::InsufficientPermissions)
        }
    }
}

pub struct AccessToken {
    pub token: String,
    pub payload: Payload,
}

/// Lifetime given to tokens minted at login. Always at least one second.
#[derive(Debug, Clone, Copy)]
pub struct TokenLifetime(pub Duration);

impl TokenLifetime {
    pub fn from_seconds(seconds: i64) -> AuthResult<Self> {
        match Duration::try_seconds(seconds) {
            Some(duration) if seconds > 0 => Ok(TokenLifetime(duration)),
            _ => Err(AuthError::InvalidTokenLifetime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn payload() -> Payload {
        let issued_at = Utc::now();

        Payload {
            id: Uuid::new_v4(),
            subject: "alice".to_string(),
            role: role::ADMINISTRATOR.to_string(),
            issued_at,
            expires_at: issued_at + Duration::minutes(15),
        }
    }

    #[rstest]
    fn test_require_exact_role(payload: Payload) {
        assert_eq!(payload.require_role(role::ADMINISTRATOR), Ok(()));
    }

    #[rstest]
    #[case::capitalized("Administrator")]
    #[case::abbreviated("admin")]
    #[case::client(role::CLIENT)]
    #[case::padded(" administrator")]
    #[case::empty("")]
    fn test_require_role_mismatch(mut payload: Payload, #[case] role: &str) {
        payload.role = role.to_string();

        assert_eq!(
            payload.require_role(role::ADMINISTRATOR),
            Err(AuthError::InsufficientPermissions)
        );
    }

    #[rstest]
    fn test_expiry_boundary(payload: Payload) {
        assert!(!payload.is_expired_at(payload.expires_at));
        assert!(payload.is_expired_at(payload.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_lifetime_from_seconds() {
        assert_eq!(
            TokenLifetime::from_seconds(900).unwrap().0,
            Duration::minutes(15)
        );
        assert_eq!(TokenLifetime::from_seconds(1).unwrap().0, Duration::seconds(1));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-5)]
    #[case::out_of_range(922_337_203_685_477_580)]
    #[case::minimum(i64::MIN)]
    fn test_lifetime_rejected(#[case] seconds: i64) {
        assert_eq!(
            TokenLifetime::from_seconds(seconds).err(),
            Some(AuthError::InvalidTokenLifetime)
        );
    }
}
