//! Blood bank and donor search endpoints (public, no auth)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::client::ApiClient;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBank {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub email: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub open_hours: String,
    pub rating: f64,
    pub is_verified: bool,
    /// Units on hand per blood type, e.g. {"O+": 12}
    pub blood_availability: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub id: i64,
    pub name: String,
    pub blood_type: String,
    pub city: String,
    pub state: String,
    pub total_donations: u32,
    pub last_donation_date: Option<String>,
    pub compatibility: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl ApiClient {
    pub async fn search_blood_banks(&self, params: &BloodSearchParams) -> Result<Vec<BloodBank>> {
        self.get_json_with_query("/blood-search/blood-banks", None, params)
            .await
    }

    pub async fn search_donors(
        &self,
        blood_type: &str,
        city: Option<&str>,
    ) -> Result<Vec<Donor>> {
        let mut query = vec![("bloodType", blood_type.to_string())];
        if let Some(city) = city {
            query.push(("city", city.to_string()));
        }

        self.get_json_with_query("/blood-search/donors", None, &query)
            .await
    }

    pub async fn find_compatible_donors(
        &self,
        recipient_blood_type: &str,
        city: Option<&str>,
    ) -> Result<Vec<Donor>> {
        let mut query = vec![("recipientBloodType", recipient_blood_type.to_string())];
        if let Some(city) = city {
            query.push(("city", city.to_string()));
        }

        self.get_json_with_query("/blood-search/compatible-donors", None, &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_serialize_only_set_fields() {
        let params = BloodSearchParams {
            blood_type: Some("A-".to_string()),
            radius: Some(25),
            ..Default::default()
        };

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, "{\"bloodType\":\"A-\",\"radius\":25}");
    }

    #[test]
    fn test_blood_bank_deserializes_availability_map() {
        let json = r#"{
            "id": 1,
            "name": "Central Blood Bank",
            "address": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "phone": "555-0100",
            "latitude": 39.78,
            "longitude": -89.65,
            "openHours": "9-17",
            "rating": 4.5,
            "isVerified": true,
            "bloodAvailability": {"O+": 12, "AB-": 0}
        }"#;

        let bank: BloodBank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.blood_availability.get("O+"), Some(&12));
        assert!(bank.email.is_none());
    }
}
