use chrono::Duration;

use crate::domain::{
    error::AuthResult,
    models::token::{AccessToken, Payload},
};

pub trait TokenService: 'static + Sync + Send {
    fn create_token(&self, subject: &str, role: &str, duration: Duration)
    -> AuthResult<AccessToken>;
    fn verify_token(&self, token: &str) -> AuthResult<Payload>;
}
