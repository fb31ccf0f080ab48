pub mod actor;
pub mod movie;
pub mod user;
pub mod validation;
