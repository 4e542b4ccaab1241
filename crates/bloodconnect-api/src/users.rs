//! User profile, donation history, and dashboard endpoints

use serde::{Deserialize, Serialize};

use crate::auth::MessageResponse;
use crate::client::ApiClient;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
    pub age: u32,
    pub city: String,
    pub state: String,
    pub total_donations: u32,
    pub points: u32,
    pub is_available: bool,
    pub last_donation_date: Option<String>,
    pub created_at: String,
}

/// Partial profile update; only the populated fields go on the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBankRef {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodDonation {
    pub id: i64,
    pub donation_date: String,
    pub blood_type: String,
    pub units_donated: u32,
    pub status: String,
    #[serde(rename = "type")]
    pub donation_type: String,
    pub notes: Option<String>,
    pub blood_bank: Option<BloodBankRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_donations: u32,
    pub points: u32,
    pub last_donation_date: Option<String>,
    pub blood_type: String,
    pub is_available: bool,
    pub next_eligible_date: Option<String>,
}

impl ApiClient {
    pub async fn get_profile(&self, token: &str) -> Result<UserProfile> {
        self.get_json("/users/profile", Some(token)).await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        updates: &ProfileUpdate,
    ) -> Result<MessageResponse> {
        self.put_json("/users/profile", Some(token), updates).await
    }

    pub async fn get_donations(&self, token: &str) -> Result<Vec<BloodDonation>> {
        self.get_json("/users/donations", Some(token)).await
    }

    pub async fn get_dashboard_stats(&self, token: &str) -> Result<DashboardStats> {
        self.get_json("/users/dashboard-stats", Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            city: Some("Springfield".to_string()),
            is_available: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"city\":\"Springfield\",\"isAvailable\":false}");
    }

    #[test]
    fn test_donation_deserializes_with_optional_bank() {
        let json = r#"{
            "id": 3,
            "donationDate": "2025-11-02",
            "bloodType": "O+",
            "unitsDonated": 1,
            "status": "COMPLETED",
            "type": "WHOLE_BLOOD"
        }"#;

        let donation: BloodDonation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.donation_type, "WHOLE_BLOOD");
        assert!(donation.blood_bank.is_none());
        assert!(donation.notes.is_none());
    }
}
