//! Feedback endpoints

use serde::{Deserialize, Serialize};

use crate::auth::MessageResponse;
use crate::client::ApiClient;
use crate::Result;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    pub category: String,
    pub rating: u8,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub allow_contact: bool,
    pub anonymous: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub category: String,
    pub rating: u8,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub admin_response: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub average_rating: f64,
    pub total_feedback: u32,
    pub pending_feedback: u32,
    pub resolved_feedback: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFeedback {
    pub id: i64,
    pub category: String,
    pub rating: u8,
    pub subject: String,
    pub message: String,
    pub user_name: String,
    pub created_at: String,
}

impl ApiClient {
    pub async fn submit_feedback(
        &self,
        token: &str,
        feedback: &FeedbackData,
    ) -> Result<MessageResponse> {
        self.post_json("/feedback/submit", Some(token), feedback)
            .await
    }

    pub async fn get_my_feedback(&self, token: &str) -> Result<Vec<Feedback>> {
        self.get_json("/feedback/my-feedback", Some(token)).await
    }

    pub async fn get_recent_feedback(&self, limit: u32) -> Result<Vec<RecentFeedback>> {
        self.get_json_with_query("/feedback/recent", None, &[("limit", limit)])
            .await
    }

    pub async fn get_feedback_stats(&self) -> Result<FeedbackStats> {
        self.get_json("/feedback/stats", None).await
    }
}
