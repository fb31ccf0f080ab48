pub mod keys;
pub mod seed;
