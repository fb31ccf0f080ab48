use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub name: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub rating: f32,
    pub actors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub name: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub rating: f32,
    pub actors: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub rating: Option<f32>,
    pub actors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovieOrder {
    #[default]
    Rating,
    Name,
    ReleaseDate,
}

impl std::fmt::Display for MovieOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rating => write!(f, "rating DESC"),
            Self::Name => write!(f, "name ASC"),
            Self::ReleaseDate => write!(f, "release_date DESC"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MovieSearch {
    Name(String),
    Actor(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: String,
    pub name: String,
}
