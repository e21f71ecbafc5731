//! Error types and Result alias for the Fitquest engine

use thiserror::Error;

/// Main error type for the Fitquest engine
///
/// Every variant is a reportable outcome, not a process failure: the
/// presentation layer decides whether to show a message or retry with
/// corrected input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("XP grant must be positive")]
    InvalidXpAmount,

    #[error("Quest not found: {0}")]
    QuestNotFound(u32),

    #[error("Quest already completed: {0}")]
    QuestAlreadyCompleted(u32),

    #[error("Catalog too small: requested {requested}, available {available}")]
    InsufficientCatalog { requested: usize, available: usize },

    #[error("Shop item not found: {0}")]
    ItemNotFound(u32),

    #[error("Item already owned: {0}")]
    ItemAlreadyOwned(u32),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u32, available: u32 },

    #[error("Theme is locked: {0}")]
    ThemeLocked(String),

    #[error("Unknown theme: {0}")]
    ThemeNotFound(String),

    #[error("Pet is too tired: needs {required} energy, has {energy}")]
    PetTooTired { required: u32, energy: u32 },

    #[error("Pet is already at full energy")]
    PetAlreadyFull,

    #[error("Workout has no exercises")]
    EmptyWorkout,

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(err.to_string())
    }
}
