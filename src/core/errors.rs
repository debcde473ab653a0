use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::core::services::ServiceError;

/// Unified error type for the domain, storage and reporting layers.
#[derive(Error, Debug)]
pub enum DonationError {
    #[error("Snapshot not loaded")]
    SnapshotNotLoaded,
    #[error("Donor not found: {0}")]
    DonorNotFound(Uuid),
    #[error("Donation not found: {0}")]
    DonationNotFound(Uuid),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, DonationError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] DonationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for DonationError {
    fn from(err: std::io::Error) -> Self {
        DonationError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for DonationError {
    fn from(err: serde_json::Error) -> Self {
        DonationError::StorageError(err.to_string())
    }
}
