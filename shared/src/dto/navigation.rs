use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::navigation::{NavigationEntry, UserHistory};
use crate::models::user::UserIdentity;

/// Data Transfer Object for one recorded page visit.
///
/// Older tracker builds wrote the path under "url" instead of "page" and
/// sometimes omitted the timestamp or the time spent; the conversion fills
/// the gaps the same way the consumers always have (now and zero).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationEntryDto {
    #[serde(alias = "url")]
    pub page: String,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(rename = "timeSpent", default)]
    pub time_spent: Option<f64>,
}

impl From<NavigationEntryDto> for NavigationEntry {
    fn from(dto: NavigationEntryDto) -> Self {
        let timestamp = dto
            .timestamp
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .unwrap_or_else(|| Utc::now().fixed_offset());
        Self {
            page: dto.page,
            timestamp,
            time_spent: dto.time_spent.unwrap_or_default(),
        }
    }
}

/// One user's grouped history as returned by the navigation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserHistoryDto {
    pub email: String,

    #[serde(rename = "navigationHistory", default)]
    pub navigation_history: Vec<NavigationEntryDto>,
}

impl From<UserHistoryDto> for UserHistory {
    fn from(dto: UserHistoryDto) -> Self {
        Self {
            user: UserIdentity::from_raw_email(&dto.email),
            entries: dto.navigation_history.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_page_field_deserializes() {
        let dto: NavigationEntryDto = serde_json::from_str(
            r#"{"page": "/pbr/dashboard", "timestamp": "2024-03-05T10:00:00+00:00", "timeSpent": 30}"#,
        )
        .expect("valid payload");
        assert_eq!(dto.page, "/pbr/dashboard");
        assert_eq!(dto.time_spent, Some(30.0));
    }

    #[test]
    fn test_legacy_url_field_deserializes() {
        let dto: NavigationEntryDto =
            serde_json::from_str(r#"{"url": "/pbr/reports"}"#).expect("valid payload");
        assert_eq!(dto.page, "/pbr/reports");
        assert_eq!(dto.timestamp, None);
        assert_eq!(dto.time_spent, None);
    }

    #[test]
    fn test_missing_timestamp_defaults_to_today() {
        let dto = NavigationEntryDto {
            page: "/pbr/reports".to_string(),
            timestamp: None,
            time_spent: None,
        };
        let entry = NavigationEntry::from(dto);
        assert_eq!(entry.visit_date(), Utc::now().date_naive());
        assert_eq!(entry.time_spent, 0.0);
    }

    #[test]
    fn test_grouped_history_conversion_cleans_email() {
        let dto: UserHistoryDto = serde_json::from_str(
            r#"{"email": "\"jane@acme.com\"", "navigationHistory": [{"page": "/pbr/home"}]}"#,
        )
        .expect("valid payload");
        let history = UserHistory::from(dto);
        assert_eq!(history.user.email, "jane@acme.com");
        assert_eq!(history.entries.len(), 1);
    }

    #[test]
    fn test_grouped_history_without_entries() {
        let dto: UserHistoryDto =
            serde_json::from_str(r#"{"email": "jane@acme.com"}"#).expect("valid payload");
        let history = UserHistory::from(dto);
        assert_eq!(history.entries.len(), 0);
    }
}
