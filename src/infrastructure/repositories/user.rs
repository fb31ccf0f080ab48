use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::user::{CreateUser, User};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::domain::repositories::user::{FindByCol, UserRepository};
use crate::infrastructure::models::user::{SurrealCount, SurrealUser, SurrealUserCreate};

use super::USER;

pub struct UserRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn signup(&self, new_user: CreateUser) -> RepositoryResult<User> {
        let user: Option<SurrealUser> = self
            .db
            .create(USER)
            .content(SurrealUserCreate::from(new_user))
            .await
            .map_err(RepositoryError::on_write(USER))?;

        user.map(Into::into)
            .ok_or(RepositoryError::MissingRecord(USER))
    }

    async fn is_user(&self, username: &str) -> RepositoryResult<bool> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) WHERE username = type::string($username) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", USER))
            .bind(("username", username.to_owned()))
            .await?;

        let counter = res.take::<Option<SurrealCount>>(0)?;

        Ok(counter.is_some_and(|counter| counter.count > 0))
    }

    async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<User>> {
        let user: Option<SurrealUser> = self
            .db
            .query(format!(
                "SELECT * FROM type::table($table) WHERE {column} = type::string($value)"
            ))
            .bind(("table", USER))
            .bind(("value", column.value()))
            .await?
            .take(0)?;

        Ok(user.map(Into::into))
    }
}

#[cfg(test)]
pub mod mock {
    use chrono::Utc;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    use super::*;
    use crate::domain::models::token::role;

    pub struct UserRepositoryImpl {
        pub users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepository for UserRepositoryImpl {
        async fn is_user(&self, username: &str) -> RepositoryResult<bool> {
            let users = self.users.lock().await;
            Ok(users.iter().any(|u| u.username == username))
        }

        async fn signup(&self, user: CreateUser) -> RepositoryResult<User> {
            let mut users = self.users.lock().await;

            if users.iter().any(|u| u.username == user.username) {
                return Err(RepositoryError::Duplicate(USER));
            }

            let created = User {
                id: Uuid::new_v4().simple().to_string(),
                username: user.username.to_owned(),
                password: user.password.to_owned(),
                role: role::CLIENT.to_string(),
                created_at: Utc::now(),
                password_changed_at: Utc::now(),
            };

            users.push(created.clone());

            Ok(created)
        }

        async fn find_one(&self, column: FindByCol) -> RepositoryResult<Option<User>> {
            let users = self.users.lock().await;

            match column {
                FindByCol::Username(username) => {
                    let user = users.iter().find(|u| u.username == username).cloned();
                    Ok(user)
                }
            }
        }
    }
}
