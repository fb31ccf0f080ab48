use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
    pub token: TokenConfig,
}

#[derive(Serialize, Deserialize, Default)]
pub struct TokenConfig {
    pub symmetric_key: String,
    /// Lifetime of access tokens issued at login, in seconds.
    pub access_token_duration: i64,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("symmetric_key", &"<redacted>")
            .field("access_token_duration", &self.access_token_duration)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans over OTLP in addition to the bunyan stdout log.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "film-catalog".to_string(),
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp: false,
                },
                token: TokenConfig {
                    symmetric_key: String::new(),
                    access_token_duration: 900,
                },
                surrealdb: SurrealDbConfig {
                    host: "localhost".to_string(),
                    port: 8000,
                    username: "root".to_string(),
                    password: "root".to_string(),
                    namespace: "catalog".to_string(),
                    database: "catalog".to_string(),
                    migration: true,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AuthError;
    use crate::domain::models::token::TokenLifetime;
    use rstest::*;

    #[test]
    fn test_token_config_debug_hides_key() {
        let config = TokenConfig {
            symmetric_key: "super-secret-signing-key-value-0123456789".to_string(),
            access_token_duration: 900,
        };

        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("900"));
    }

    #[test]
    fn test_environment_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP_TOKEN__SYMMETRIC_KEY", "from-environment-0123456789abcdef");
            jail.set_env("APP_TOKEN__ACCESS_TOKEN_DURATION", "60");
            jail.set_env("APP_SERVICE__PORT", "9090");

            let config = AppConfig::load()?;

            assert_eq!(config.token.symmetric_key, "from-environment-0123456789abcdef");
            assert_eq!(config.token.access_token_duration, 60);
            assert_eq!(config.service.port, 9090);

            Ok(())
        });
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-30")]
    #[case::out_of_range("922337203685477580")]
    fn test_unusable_token_lifetime(#[case] seconds: &str) {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP_TOKEN__ACCESS_TOKEN_DURATION", seconds);

            let config = AppConfig::load()?;

            assert_eq!(
                TokenLifetime::from_seconds(config.token.access_token_duration).err(),
                Some(AuthError::InvalidTokenLifetime)
            );

            Ok(())
        });
    }
}
