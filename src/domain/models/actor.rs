use chrono::{DateTime, Utc};

use super::movie::MovieSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub birthday: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub gender: String,
    pub birthday: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ActorWithMovies {
    pub actor: Actor,
    pub movies: Vec<MovieSummary>,
}
