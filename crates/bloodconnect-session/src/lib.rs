//! BloodConnect Session Management
//!
//! Owns the client's belief about the current authenticated identity:
//! - A session is `token + user record + derived status`
//! - Every mutation writes through to the persistent store
//! - Startup validation is fail-closed: an unverifiable token is treated
//!   as absent, never surfaced as an error to UI consumers
//! - One validation at startup is the entire consistency mechanism; there
//!   is no refresh timer and no cross-window synchronization

mod error;
mod manager;
mod session;
mod validator;

pub use error::SessionError;
pub use manager::{SessionManager, TOKEN_KEY, USER_KEY};
pub use session::{Session, SessionStatus, UserRecord};
pub use validator::{TokenValidator, ValidationError};

pub type Result<T> = std::result::Result<T, SessionError>;
