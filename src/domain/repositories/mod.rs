pub mod actor;
pub mod movie;
pub mod repository;
pub mod user;
