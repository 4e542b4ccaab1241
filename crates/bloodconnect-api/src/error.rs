//! API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Non-2xx response, carrying the backend's message when it sent one
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
