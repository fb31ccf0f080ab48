use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::user::{CreateUser, Credentials, User},
    repositories::{
        repository::RepositoryError,
        user::{FindByCol, UserRepository},
    },
    services::user::UserService,
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::info;

static USER_EXISTS: &str = "User already exists";

/// Verified against when the username is unknown, so both failures cost one argon2 run.
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| hash_password("not-a-real-password").unwrap_or_default());

pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    async fn is_user(&self, username: &str) -> AppResult<bool> {
        Ok(self.repository.is_user(username).await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .repository
            .find_one(FindByCol::Username(username.to_string()))
            .await?)
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn signup(&self, mut new_user: CreateUser) -> AppResult<User> {
        if self.is_user(&new_user.username).await? {
            return Err(AppError::Conflict(USER_EXISTS));
        }

        new_user.password = hash_password(&new_user.password)?;

        // A concurrent sign-up can still win the race to the unique index.
        let user = self
            .repository
            .signup(new_user)
            .await
            .map_err(|error| match error {
                RepositoryError::Duplicate(_) => AppError::Conflict(USER_EXISTS),
                error => AppError::from(error),
            })?;

        info!(username = %user.username, role = %user.role, "user signed up");

        Ok(user)
    }

    async fn signin(&self, credentials: Credentials) -> AppResult<User> {
        let user = match self.find_by_username(&credentials.username).await? {
            Some(user) => user,
            None => {
                let _ = verify_password(&credentials.password, &DUMMY_HASH);
                return Err(AppError::Unauthorized());
            }
        };

        verify_password(&credentials.password, &user.password)?;

        Ok(user)
    }
}

pub fn hash_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
