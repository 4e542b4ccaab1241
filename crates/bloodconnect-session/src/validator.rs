//! Token validation boundary
//!
//! The session manager only needs success/failure plus a payload from the
//! remote auth endpoint; the transport lives behind this trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::session::UserRecord;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Token rejected: {0}")]
    Rejected(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Remote check of a stored bearer token.
///
/// Called exactly once, during startup validation. Every error variant is
/// handled the same way by the caller (fail-closed to a logged-out
/// session); the distinction exists for logging.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate_token(&self, token: &str) -> Result<UserRecord, ValidationError>;
}
