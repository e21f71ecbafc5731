//! SQLite database management

mod connection;
mod pets;
mod settings;
mod snapshots;
mod workouts;

pub use connection::Database;
pub use pets::*;
pub use settings::*;
pub use snapshots::*;
pub use workouts::*;
