use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::validation::{is_password, is_username};
use crate::domain::models::token::AccessToken;
use crate::domain::models::user::{CreateUser, Credentials, User};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDTO {
    #[schema(examples("vkuser"))]
    username: String,
    #[schema(examples("client"))]
    role: String,
    created_at: DateTime<Utc>,
    password_changed_at: DateTime<Utc>,
}

/// New users always get the `client` role; administrators are provisioned in the database.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateUserDTO {
    #[validate(custom(function = "is_username"))]
    #[schema(examples("vkuser"))]
    pub username: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("password123"))]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(custom(function = "is_username"))]
    #[schema(examples("admin"))]
    pub username: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("qwerty"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub access_token: String,
    #[schema(examples(1385903))]
    pub expires_at: i64,
    pub user: UserDTO,
}

impl From<User> for UserDTO {
    fn from(val: User) -> Self {
        UserDTO {
            username: val.username,
            role: val.role,
            created_at: val.created_at,
            password_changed_at: val.password_changed_at,
        }
    }
}

impl LoginDTO {
    pub fn new(access_token: AccessToken, user: User) -> Self {
        LoginDTO {
            expires_at: access_token.payload.expires_at.timestamp(),
            access_token: access_token.token,
            user: user.into(),
        }
    }
}

impl From<CreateUserDTO> for CreateUser {
    fn from(create_user: CreateUserDTO) -> Self {
        CreateUser {
            username: create_user.username,
            password: create_user.password,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            username: credentials.username,
            password: credentials.password,
        }
    }
}
