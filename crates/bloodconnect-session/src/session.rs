//! Session data structures

use serde::{Deserialize, Serialize};

/// The identity record persisted alongside the token.
///
/// Fixed schema: a stored record missing required fields fails to
/// deserialize and is treated as absent on the next startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Session lifecycle state
///
/// ```text
/// Initializing
///   ↓ startup validation (exactly once)
/// Authenticated ⇄ Unauthenticated   (login / logout)
/// ```
///
/// `Initializing` is never re-entered after the first resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Startup validation has not resolved yet
    Initializing,
    /// A token and user record are present and believed valid
    Authenticated,
    /// No usable credentials
    Unauthenticated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Initializing => "initializing",
            SessionStatus::Authenticated => "authenticated",
            SessionStatus::Unauthenticated => "unauthenticated",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The in-memory belief about the current identity.
///
/// Fields are private and only the constructors below can build one, so
/// `status == Authenticated` iff both token and user are present, in every
/// reachable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    token: Option<String>,
    user: Option<UserRecord>,
    status: SessionStatus,
}

impl Session {
    /// The empty session at process start, before startup validation.
    pub fn initializing() -> Self {
        Self {
            token: None,
            user: None,
            status: SessionStatus::Initializing,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            token: None,
            user: None,
            status: SessionStatus::Unauthenticated,
        }
    }

    pub fn authenticated(token: String, user: UserRecord) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            status: SessionStatus::Authenticated,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True while startup validation has not resolved. Consumers should
    /// render a neutral state instead of branching on `is_authenticated`.
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Initializing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(session: &Session) {
        let both_present = session.token().is_some() && session.user().is_some();
        assert_eq!(session.is_authenticated(), both_present);
    }

    #[test]
    fn test_constructors_uphold_invariant() {
        let user = UserRecord {
            id: "1".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            blood_type: "O+".to_string(),
            avatar: None,
        };

        assert_invariant(&Session::initializing());
        assert_invariant(&Session::unauthenticated());
        assert_invariant(&Session::authenticated("t1".to_string(), user));
    }

    #[test]
    fn test_loading_only_while_initializing() {
        assert!(Session::initializing().is_loading());
        assert!(!Session::unauthenticated().is_loading());
    }

    #[test]
    fn test_user_record_round_trips_camel_case() {
        let json = r#"{
            "id": "42",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "bloodType": "AB-",
            "avatar": "https://example.com/a.png"
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.blood_type, "AB-");

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("\"bloodType\":\"AB-\""));
    }

    #[test]
    fn test_user_record_missing_field_is_error() {
        // No email: must fail rather than fill in a default
        let json = r#"{"id":"1","name":"X","phone":"1","bloodType":"A+"}"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }
}
