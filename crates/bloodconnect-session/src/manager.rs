//! Session Manager
//!
//! Mediates all reads and writes of the persisted identity. The persisted
//! copy lives under two keys that are always written and deleted together;
//! the in-memory copy is the single source of truth for UI consumers.

use parking_lot::RwLock;
use std::sync::Arc;

use bloodconnect_storage::Database;

use crate::session::{Session, UserRecord};
use crate::validator::TokenValidator;
use crate::Result;

/// Store key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "bloodconnect_token";
/// Store key holding the serialized user record.
pub const USER_KEY: &str = "bloodconnect_user";

pub struct SessionManager {
    /// In-memory session, exclusively owned by this manager
    session: Arc<RwLock<Session>>,
    /// Database for persistence
    db: Database,
    /// Remote check used once, during `initialize`
    validator: Arc<dyn TokenValidator>,
}

impl SessionManager {
    pub fn new(db: Database, validator: Arc<dyn TokenValidator>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::initializing())),
            db,
            validator,
        }
    }

    /// Resolve the session from the persisted store, validating any stored
    /// token with the remote endpoint. Runs once per process lifetime; the
    /// only suspend point in the session lifecycle.
    ///
    /// Never returns a validation error: an unverifiable token degrades to
    /// a logged-out session with the store purged (fail-closed).
    pub async fn initialize(&self) -> Result<Session> {
        if !self.session.read().is_loading() {
            tracing::warn!("initialize called after session already resolved; ignoring");
            return Ok(self.snapshot());
        }

        let stored_token = self.db.get(TOKEN_KEY)?;
        let stored_user = self.db.get(USER_KEY)?;

        let (token, user) = match (stored_token, stored_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<UserRecord>(&raw) {
                Ok(user) => (token, user),
                Err(e) => {
                    // Malformed record is equivalent to no session
                    tracing::warn!("Stored user record is malformed: {}", e);
                    self.purge()?;
                    return Ok(self.resolve(Session::unauthenticated()));
                }
            },
            (None, None) => {
                // Nothing stored: resolve without touching the network
                return Ok(self.resolve(Session::unauthenticated()));
            }
            _ => {
                // Token without user or user without token, e.g. a crash
                // between writes. Treated as no session.
                tracing::warn!("Partial credentials in store; clearing");
                self.purge()?;
                return Ok(self.resolve(Session::unauthenticated()));
            }
        };

        match self.validator.validate_token(&token).await {
            Ok(fresh) => {
                // Keep the stored record; the freshly returned payload is
                // only used to notice drift.
                if fresh != user {
                    tracing::debug!(
                        user_id = %user.id,
                        "Validation payload differs from stored record, keeping stored copy"
                    );
                }

                let raw = serde_json::to_string(&user)?;
                self.db
                    .put_many(&[(TOKEN_KEY, token.as_str()), (USER_KEY, raw.as_str())])?;

                tracing::info!(user_id = %user.id, "Session restored");
                Ok(self.resolve(Session::authenticated(token, user)))
            }
            Err(e) => {
                // Fail-closed: any validation failure, including plain
                // network trouble, resolves to logged-out with the stale
                // token removed from the store.
                tracing::info!("Token validation failed, clearing session: {}", e);
                self.purge()?;
                Ok(self.resolve(Session::unauthenticated()))
            }
        }
    }

    /// Adopt credentials obtained from a successful login or OTP
    /// verification already performed by the caller. No network call of
    /// its own; last write wins.
    pub fn login(&self, token: impl Into<String>, user: UserRecord) -> Result<Session> {
        let token = token.into();
        let raw = serde_json::to_string(&user)?;
        self.db
            .put_many(&[(TOKEN_KEY, token.as_str()), (USER_KEY, raw.as_str())])?;

        tracing::info!(user_id = %user.id, "Logged in");

        let session = Session::authenticated(token, user);
        *self.session.write() = session.clone();
        Ok(session)
    }

    /// Clear the session in memory and in the store. Idempotent, no
    /// network side effect.
    pub fn logout(&self) -> Result<()> {
        self.purge()?;
        *self.session.write() = Session::unauthenticated();

        tracing::info!("Logged out");
        Ok(())
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<UserRecord> {
        self.session.read().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// True until `initialize` resolves for the first time.
    pub fn loading(&self) -> bool {
        self.session.read().is_loading()
    }

    fn resolve(&self, session: Session) -> Session {
        *self.session.write() = session.clone();
        session
    }

    fn purge(&self) -> Result<()> {
        self.db.delete_many(&[TOKEN_KEY, USER_KEY])?;
        Ok(())
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            db: self.db.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}
