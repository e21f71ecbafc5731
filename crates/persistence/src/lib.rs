//! Fitquest Persistence - Local snapshot store and remote-profile cache

pub mod cache;
pub mod sqlite;

pub use cache::ProfileCache;
pub use sqlite::Database;
