pub mod actor;
pub mod movie;
pub mod token;
pub mod user;
