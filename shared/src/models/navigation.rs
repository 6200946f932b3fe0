use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::user::UserIdentity;

/// A single page visit recorded by the tracker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationEntry {
    /// Raw path as recorded ("/pbr/dashboard") or the normalized page name
    /// after the analytics cleanup pass
    pub page: String,

    pub timestamp: DateTime<FixedOffset>,

    /// Seconds spent on the page
    pub time_spent: f64,
}

impl NavigationEntry {
    /// Calendar day of the visit; range filtering and the daily trend
    /// compare dates, not instants
    pub fn visit_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Timestamp as shown in the navigation tables ("Mar 5, 2024, 9:05:07 AM")
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
    }
}

/// One user's navigation history as returned by the grouped endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserHistory {
    pub user: UserIdentity,
    pub entries: Vec<NavigationEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_visit_date_is_calendar_day() {
        let entry = NavigationEntry {
            page: "dashboard".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-03-05T23:59:59+00:00")
                .expect("valid timestamp"),
            time_spent: 42.0,
        };
        assert_eq!(
            entry.visit_date(),
            NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date")
        );
    }

    #[test]
    fn test_timestamp_label_has_no_padding() {
        let entry = NavigationEntry {
            page: "dashboard".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-03-05T09:05:07+00:00")
                .expect("valid timestamp"),
            time_spent: 42.0,
        };
        assert_eq!(entry.timestamp_label(), "Mar 5, 2024, 9:05:07 AM");
    }
}
