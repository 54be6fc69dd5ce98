use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum RosterError {
    /// A required field was absent or empty
    #[error("Field `{0}` is required")]
    MissingField(String),

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Request payload could not be read
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<mongodb::error::Error> for RosterError {
    fn from(err: mongodb::error::Error) -> Self {
        RosterError::DatabaseError(err.to_string())
    }
}
