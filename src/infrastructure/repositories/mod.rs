pub mod actor;
pub mod movie;
pub mod user;

pub(crate) const USER: &str = "user";
pub(crate) const MOVIE: &str = "movie";
pub(crate) const ACTOR: &str = "actor";
