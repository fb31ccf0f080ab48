use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::token::role;
use crate::domain::models::user::{CreateUser, User};

#[derive(Debug, Deserialize)]
pub struct SurrealUser {
    id: Thing,
    username: String,
    password: String,
    role: String,
    created_at: Datetime,
    password_changed_at: Datetime,
}

#[derive(Serialize)]
pub struct SurrealUserCreate {
    username: String,
    password: String,
    role: String,
}

impl From<CreateUser> for SurrealUserCreate {
    fn from(user: CreateUser) -> Self {
        SurrealUserCreate {
            username: user.username,
            password: user.password,
            role: role::CLIENT.to_string(),
        }
    }
}

impl From<SurrealUser> for User {
    fn from(user: SurrealUser) -> Self {
        User {
            id: user.id.id.to_string(),
            username: user.username,
            password: user.password,
            role: user.role,
            created_at: user.created_at.0,
            password_changed_at: user.password_changed_at.0,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SurrealCount {
    pub count: i64,
}
