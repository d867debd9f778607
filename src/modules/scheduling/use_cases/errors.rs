use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

/// Rejections caused by what the caller typed. Shown to the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event name must not be empty")]
    EmptyName,

    #[error("Could not understand time '{0}'")]
    UnparsableTime(String),

    #[error("Cannot create an event in the past")]
    InThePast,

    #[error("Missing {0}")]
    MissingArgument(&'static str),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No event found with id {0}")]
    NotFound(String),

    #[error("Failed to save changes: {0}")]
    Persistence(#[from] RecordStoreError),
}
