//! Error types for the evreg ecosystem.

use thiserror::Error;

/// Errors that can occur in evreg operations.
///
/// The validation variants carry the exact wording shown to users, so the
/// CLI can print them directly.
#[derive(Error, Debug)]
pub enum EvregError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("An event with that ID already exists. Choose a unique ID.")]
    DuplicateEventId(String),

    #[error("Please fill in Event ID, Name and Date.")]
    MissingField(&'static str),

    #[error("Please enter a Student ID.")]
    MissingStudentId,
}

/// Result type alias for evreg operations.
pub type EvregResult<T> = Result<T, EvregError>;
