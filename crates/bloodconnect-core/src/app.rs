//! Main application state container
//!
//! All client state flows through here; the UI shell is purely a
//! renderer over the session surface and the typed API results.

use std::sync::Arc;
use std::time::Duration;

use bloodconnect_api::{
    ApiClient, BloodBank, BloodDonation, BloodSearchParams, DashboardStats, Donor, Feedback,
    FeedbackData, FeedbackStats, LoginRequest, ProfileUpdate, RecentFeedback, SignupRequest,
    UserProfile,
};
use bloodconnect_session::{Session, SessionManager};
use bloodconnect_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Main application instance
pub struct App {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// REST client for the remote backend
    api: ApiClient,
    /// Session manager (owns the authenticated identity)
    session_manager: SessionManager,
}

impl App {
    /// Build a new application instance. Does not touch the network; the
    /// stored session stays `loading` until `initialize` runs.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;

        let api = ApiClient::with_timeout(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        let session_manager = SessionManager::new(db.clone(), Arc::new(api.clone()));

        Ok(Self {
            config,
            db,
            api,
            session_manager,
        })
    }

    /// Restore the persisted session, validating any stored token with
    /// the backend. Runs once at startup.
    pub async fn initialize(&self) -> Result<Session> {
        let session = self.session_manager.initialize().await?;

        tracing::info!(status = %session.status(), "App initialized");

        Ok(session)
    }

    // === Auth operations ===

    pub async fn login(&self, email: String, password: String) -> Result<Session> {
        let response = self.api.login(&LoginRequest { email, password }).await?;
        let (token, user) = response.into_credentials();

        Ok(self.session_manager.login(token, user)?)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<String> {
        Ok(self.api.signup(request).await?.message)
    }

    pub fn logout(&self) -> Result<()> {
        Ok(self.session_manager.logout()?)
    }

    pub fn session(&self) -> Session {
        self.session_manager.snapshot()
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }

    fn bearer(&self) -> Result<String> {
        self.session_manager
            .token()
            .ok_or(CoreError::NotAuthenticated)
    }

    // === Profile operations ===

    pub async fn profile(&self) -> Result<UserProfile> {
        let token = self.bearer()?;
        Ok(self.api.get_profile(&token).await?)
    }

    pub async fn update_profile(&self, updates: &ProfileUpdate) -> Result<String> {
        let token = self.bearer()?;
        Ok(self.api.update_profile(&token, updates).await?.message)
    }

    pub async fn donations(&self) -> Result<Vec<BloodDonation>> {
        let token = self.bearer()?;
        Ok(self.api.get_donations(&token).await?)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let token = self.bearer()?;
        Ok(self.api.get_dashboard_stats(&token).await?)
    }

    // === Blood search operations (public endpoints) ===

    pub async fn search_blood_banks(&self, params: &BloodSearchParams) -> Result<Vec<BloodBank>> {
        Ok(self.api.search_blood_banks(params).await?)
    }

    pub async fn search_donors(
        &self,
        blood_type: &str,
        city: Option<&str>,
    ) -> Result<Vec<Donor>> {
        Ok(self.api.search_donors(blood_type, city).await?)
    }

    pub async fn find_compatible_donors(
        &self,
        recipient_blood_type: &str,
        city: Option<&str>,
    ) -> Result<Vec<Donor>> {
        Ok(self
            .api
            .find_compatible_donors(recipient_blood_type, city)
            .await?)
    }

    // === Feedback operations ===

    pub async fn submit_feedback(&self, feedback: &FeedbackData) -> Result<String> {
        let token = self.bearer()?;
        Ok(self.api.submit_feedback(&token, feedback).await?.message)
    }

    pub async fn my_feedback(&self) -> Result<Vec<Feedback>> {
        let token = self.bearer()?;
        Ok(self.api.get_my_feedback(&token).await?)
    }

    pub async fn recent_feedback(&self, limit: u32) -> Result<Vec<RecentFeedback>> {
        Ok(self.api.get_recent_feedback(limit).await?)
    }

    pub async fn feedback_stats(&self) -> Result<FeedbackStats> {
        Ok(self.api.get_feedback_stats().await?)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            api: self.api.clone(),
            session_manager: self.session_manager.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloodconnect_session::UserRecord;

    fn test_app() -> App {
        let config = Config {
            database_path: std::path::PathBuf::from(":memory:"),
            // Unroutable; tests below never reach the network
            api_base_url: "http://127.0.0.1:1/api".to_string(),
            request_timeout_secs: 1,
        };

        let db = Database::open_in_memory().unwrap();
        let api = ApiClient::with_timeout(&config.api_base_url, Duration::from_secs(1)).unwrap();
        let session_manager = SessionManager::new(db.clone(), Arc::new(api.clone()));

        App {
            config,
            db,
            api,
            session_manager,
        }
    }

    fn test_user() -> UserRecord {
        UserRecord {
            id: "1".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            blood_type: "O+".to_string(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_initialize_with_empty_store() {
        let app = test_app();
        assert!(app.session().is_loading());

        // Empty store resolves locally, no backend round-trip
        let session = app.initialize().await.unwrap();
        assert!(!session.is_authenticated());
        assert!(!app.session().is_loading());
    }

    #[tokio::test]
    async fn test_authenticated_calls_require_login() {
        let app = test_app();
        app.initialize().await.unwrap();

        let err = app.profile().await.unwrap_err();
        assert!(matches!(err, CoreError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let app = test_app();
        app.initialize().await.unwrap();

        app.session_manager().login("t1", test_user()).unwrap();
        assert!(app.session().is_authenticated());

        app.logout().unwrap();
        assert!(!app.session().is_authenticated());

        // Idempotent
        app.logout().unwrap();
        assert!(!app.session().is_authenticated());
    }
}
