//! BloodConnect Core
//!
//! Coordination layer for the BloodConnect client. Owns the wiring of
//! storage, API client, and session manager; the host UI shell is a
//! stateless renderer over the state exposed here.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use bloodconnect_api::{
    ApiClient, ApiError, AuthResponse, BloodBank, BloodDonation, BloodSearchParams,
    DashboardStats, Donor, Feedback, FeedbackData, FeedbackStats, LoginRequest, ProfileUpdate,
    RecentFeedback, SignupRequest, UserProfile,
};
pub use bloodconnect_session::{
    Session, SessionError, SessionManager, SessionStatus, TokenValidator, UserRecord,
    ValidationError,
};
pub use bloodconnect_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
