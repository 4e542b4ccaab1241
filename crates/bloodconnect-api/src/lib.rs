//! BloodConnect API Client
//!
//! Typed REST client for the remote backend. Thin pass-through: requests
//! go out, typed payloads or an `ApiError` come back, and failures are
//! surfaced verbatim to the caller. The one exception is token
//! validation, which the session crate consumes through its
//! `TokenValidator` boundary and maps fail-closed.

mod auth;
mod blood_search;
mod client;
mod error;
mod feedback;
mod users;

pub use auth::{AuthResponse, LoginRequest, MessageResponse, SignupRequest};
pub use blood_search::{BloodBank, BloodSearchParams, Donor};
pub use client::ApiClient;
pub use error::ApiError;
pub use feedback::{Feedback, FeedbackData, FeedbackStats, RecentFeedback};
pub use users::{BloodBankRef, BloodDonation, DashboardStats, ProfileUpdate, UserProfile};

pub type Result<T> = std::result::Result<T, ApiError>;
