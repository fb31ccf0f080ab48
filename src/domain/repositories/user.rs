use async_trait::async_trait;

use crate::domain::models::user::{CreateUser, User};

use super::repository::RepositoryResult;

#[derive(Debug, Clone)]
pub enum FindByCol {
    Username(String),
}

impl FindByCol {
    pub fn value(self) -> String {
        match self {
            Self::Username(username) => username,
        }
    }
}

impl std::fmt::Display for FindByCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Username(_) => write!(f, "username"),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn is_user(&self, username: &str) -> RepositoryResult<bool>;
    async fn signup(&self, new_user: CreateUser) -> RepositoryResult<User>;
    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<User>>;
}
