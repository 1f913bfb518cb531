//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review sentiment, attached by the submission layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Review moderation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Processed,
    Resolved,
}

/// Review entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub restaurant_address: String,
    /// 1..=5 by convention; not enforced by the store.
    pub rating: u8,
    pub text: String,
    pub sentiment: Sentiment,
    pub status: ReviewStatus,
    /// Whether the review is shown inside the app.
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_response: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Stamped whenever a patch carries a status value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Create review payload (everything except `id` and `createdAt`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub restaurant_address: String,
    pub rating: u8,
    pub text: String,
    pub sentiment: Sentiment,
    pub status: ReviewStatus,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Update review payload (field-wise merge).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Sentiment::Positive).unwrap(), "\"positive\"");
        assert_eq!(serde_json::to_string(&ReviewStatus::Pending).unwrap(), "\"pending\"");
        let status: ReviewStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(status, ReviewStatus::Resolved);
    }

    #[test]
    fn review_without_optional_fields_round_trips() {
        let json = r#"{
            "id": "review_test_1",
            "userId": "test_user_1",
            "userName": "Анна К.",
            "userPhone": "+7900123456",
            "restaurantId": "nn-rozh",
            "restaurantName": "Хачапури Марико",
            "restaurantAddress": "Нижний Новгород, Рождественская, 39",
            "rating": 5,
            "text": "Прекрасное место!",
            "sentiment": "positive",
            "status": "processed",
            "isPublic": true,
            "createdAt": "2025-05-30T10:00:00.000Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.manager_response, None);
        assert_eq!(review.processed_at, None);
        let out = serde_json::to_string(&review).unwrap();
        assert!(!out.contains("managerResponse"));
        assert!(!out.contains("processedAt"));
    }
}
