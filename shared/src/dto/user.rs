use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::dto::navigation::NavigationEntryDto;
use crate::models::user::User;

/// Accepts the seconds value as a number or a numeric string; the list and
/// overview endpoints disagree on which one they send. Anything else maps
/// to `None`.
fn seconds_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Data Transfer Object for a user account as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    /// Document id (serialized as "_id" in JSON); absent on some payloads
    #[serde(rename = "_id", default)]
    pub record_id: Option<String>,

    /// Numeric id used by the reset and suspend endpoints
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    pub email: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "lastLogin", default)]
    pub last_login: Option<String>,

    #[serde(default)]
    pub balance: Option<f64>,

    /// Seconds, as a number or a numeric string depending on the endpoint
    #[serde(
        rename = "accumulatedTime",
        default,
        deserialize_with = "seconds_from_number_or_string"
    )]
    pub accumulated_time: Option<f64>,

    /// Embedded history, present on the overview payload only
    #[serde(rename = "navigationHistory", default)]
    pub navigation_history: Vec<NavigationEntryDto>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            record_id: dto.record_id.unwrap_or_default(),
            id: dto.id.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            email: dto.email,
            status: dto.status.unwrap_or_default(),
            last_login: dto
                .last_login
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok()),
            balance: dto.balance.unwrap_or_default(),
            accumulated_seconds: dto.accumulated_time.unwrap_or_default(),
            history: dto
                .navigation_history
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Request body for the edit action
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;
    use validator::Validate;

    fn create_test_user_json(accumulated: &str) -> String {
        format!(
            r#"{{
                "_id": "66b1f0c2",
                "id": 7,
                "name": "Jane Doe",
                "email": "jane@acme.com",
                "status": "Active",
                "lastLogin": "2024-03-05T10:30:00+00:00",
                "balance": 12.5,
                "accumulatedTime": {accumulated}
            }}"#
        )
    }

    #[test]
    fn test_accumulated_time_as_number() {
        let dto: UserDto =
            serde_json::from_str(&create_test_user_json("5400")).expect("valid payload");
        assert_eq!(dto.accumulated_time, Some(5400.0));
    }

    #[test]
    fn test_accumulated_time_as_numeric_string() {
        let dto: UserDto =
            serde_json::from_str(&create_test_user_json("\"5400.5\"")).expect("valid payload");
        assert_eq!(dto.accumulated_time, Some(5400.5));
    }

    #[test]
    fn test_accumulated_time_garbage_maps_to_none() {
        let dto: UserDto =
            serde_json::from_str(&create_test_user_json("\"not a number\"")).expect("valid payload");
        assert_eq!(dto.accumulated_time, None);
    }

    #[test]
    fn test_minimal_payload_deserializes() {
        let dto: UserDto =
            serde_json::from_str(r#"{"email": "jane@acme.com"}"#).expect("valid payload");
        assert_eq!(dto.record_id, None);
        assert_eq!(dto.navigation_history.len(), 0);

        let user = User::from(dto);
        assert_eq!(user.email, "jane@acme.com");
        assert_eq!(user.accumulated_seconds, 0.0);
        assert_eq!(user.last_login, None);
    }

    #[test]
    fn test_conversion_parses_last_login() {
        let dto: UserDto =
            serde_json::from_str(&create_test_user_json("0")).expect("valid payload");
        let user = User::from(dto);
        assert!(user.last_login.is_some());
        assert_eq!(user.record_id, "66b1f0c2");
        assert_eq!(user.id, 7);
    }

    #[test]
    fn test_unparsable_last_login_maps_to_none() {
        let json = r#"{"email": "jane@acme.com", "lastLogin": "yesterday"}"#;
        let dto: UserDto = serde_json::from_str(json).expect("valid payload");
        let user = User::from(dto);
        assert_eq!(user.last_login, None);
    }

    #[test]
    fn test_update_request_requires_valid_email() {
        let request = UpdateUserRequest {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(request.validate().is_err());

        let request = UpdateUserRequest {
            name: "Jane".to_string(),
            email: "jane@acme.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_requires_name() {
        let request = UpdateUserRequest {
            name: String::new(),
            email: "jane@acme.com".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
