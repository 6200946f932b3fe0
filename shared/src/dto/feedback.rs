use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::feedback::Feedback;

/// Data Transfer Object for one feedback submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackDto {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl From<FeedbackDto> for Feedback {
    fn from(dto: FeedbackDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email.unwrap_or_default(),
            rating: dto.rating.unwrap_or_default(),
            comment: dto.comment.unwrap_or_default(),
            created_at: dto
                .created_at
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_full_feedback_payload() {
        let dto: FeedbackDto = serde_json::from_str(
            r#"{"_id": "f1", "email": "jane@acme.com", "rating": 4, "comment": "Solid", "createdAt": "2024-03-05T10:00:00+00:00"}"#,
        )
        .expect("valid payload");
        let feedback = Feedback::from(dto);
        assert_eq!(feedback.rating, 4.0);
        assert!(feedback.created_at.is_some());
    }

    #[test]
    fn test_sparse_feedback_payload() {
        let dto: FeedbackDto = serde_json::from_str(r#"{"_id": "f2"}"#).expect("valid payload");
        let feedback = Feedback::from(dto);
        assert_eq!(feedback.rating, 0.0);
        assert_eq!(feedback.comment, "");
        assert_eq!(feedback.created_at, None);
    }
}
