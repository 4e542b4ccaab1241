//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] bloodconnect_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] bloodconnect_session::SessionError),

    #[error("API error: {0}")]
    Api(#[from] bloodconnect_api::ApiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in")]
    NotAuthenticated,
}

// Map fs errors from data-dir creation
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
