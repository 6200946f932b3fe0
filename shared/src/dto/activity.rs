use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::activity::{ActivityGraph, ActivitySample, UserActivity};
use crate::models::user::UserIdentity;

/// Activity dates arrive as RFC 3339 instants most of the time, but older
/// rows carry a bare day or an already-formatted display string.
fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .or_else(|| UserActivity::parse_display_date(raw))
}

/// Data Transfer Object for one activity row; the wire carries the user as
/// a bare email string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserActivityDto {
    #[serde(default)]
    pub id: Option<i64>,

    pub user: String,

    #[serde(default)]
    pub activity: Option<String>,

    /// Activity date as sent by the backend; see `parse_wire_date`
    #[serde(default)]
    pub date: Option<String>,

    #[serde(rename = "timeSpent", default)]
    pub time_spent: Option<f64>,
}

impl From<UserActivityDto> for UserActivity {
    fn from(dto: UserActivityDto) -> Self {
        let date = dto.date.as_deref().and_then(parse_wire_date);
        let display_date = match date {
            Some(day) => day.format("%d/%m/%Y").to_string(),
            None => dto.date.unwrap_or_default(),
        };
        Self {
            id: dto.id.unwrap_or_default(),
            user: UserIdentity::from_raw_email(&dto.user),
            activity: dto.activity.unwrap_or_default(),
            date,
            display_date,
            time_spent: dto.time_spent.unwrap_or_default(),
        }
    }
}

/// The per-user graph endpoint's response: parallel date and seconds arrays
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActivityGraphDto {
    #[serde(default)]
    pub dates: Vec<String>,

    #[serde(rename = "timeSpent", default)]
    pub time_spent: Vec<f64>,
}

impl From<ActivityGraphDto> for ActivityGraph {
    fn from(dto: ActivityGraphDto) -> Self {
        // Zip stops at the shorter array; samples with unparsable dates are
        // dropped rather than failing the whole payload
        let samples = dto
            .dates
            .iter()
            .zip(dto.time_spent.iter())
            .filter_map(|(raw, seconds)| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .map(|date| ActivitySample {
                        date,
                        time_spent: *seconds,
                    })
            })
            .collect();
        Self { samples }
    }
}
