//! External services.

pub mod provider;
pub mod tmdb;
