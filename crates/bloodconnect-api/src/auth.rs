//! Authentication endpoints

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bloodconnect_session::{TokenValidator, UserRecord, ValidationError};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::Result;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub blood_type: String,
    pub age: u32,
    pub city: String,
    pub state: String,
}

/// Token plus flattened user fields, as the backend returns them from
/// both login and validate-token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub blood_type: String,
    pub role: String,
}

impl AuthResponse {
    /// Split into the pair the session manager stores.
    pub fn into_credentials(self) -> (String, UserRecord) {
        let user = UserRecord {
            id: self.id.to_string(),
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            phone: self.phone,
            blood_type: self.blood_type,
            avatar: None,
        };

        (self.token, user)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        self.post_json("/auth/login", None, credentials).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse> {
        self.post_json("/auth/signup", None, request).await
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthResponse> {
        self.post_empty("/auth/validate-token", Some(token)).await
    }
}

#[async_trait]
impl TokenValidator for ApiClient {
    async fn validate_token(&self, token: &str) -> std::result::Result<UserRecord, ValidationError> {
        let response = ApiClient::validate_token(self, token)
            .await
            .map_err(|e| match e {
                ApiError::Api { status, message } => {
                    ValidationError::Rejected(format!("{}: {}", status, message))
                }
                ApiError::Transport(e) if e.is_decode() => {
                    ValidationError::MalformedResponse(e.to_string())
                }
                ApiError::Transport(e) => ValidationError::Network(e.to_string()),
                ApiError::Url(e) => ValidationError::Network(e.to_string()),
            })?;

        let (_, user) = response.into_credentials();
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_into_credentials() {
        let json = r#"{
            "token": "jwt-abc",
            "type": "Bearer",
            "id": 7,
            "email": "jane@example.com",
            "firstName": "Jane",
            "lastName": "Doe",
            "phone": "555-0100",
            "bloodType": "O+",
            "role": "DONOR"
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let (token, user) = response.into_credentials();

        assert_eq!(token, "jwt-abc");
        assert_eq!(user.id, "7");
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.blood_type, "O+");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_signup_request_serializes_camel_case() {
        let request = SignupRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            password: "secret".to_string(),
            blood_type: "O+".to_string(),
            age: 30,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"bloodType\":\"O+\""));
    }
}
