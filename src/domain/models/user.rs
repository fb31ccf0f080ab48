use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub password_changed_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
