use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::user::UserIdentity;

/// A tracked activity row as shown on the activity page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserActivity {
    pub id: i64,
    pub user: UserIdentity,
    pub activity: String,

    /// Parsed activity day; `None` when the wire value did not parse
    pub date: Option<NaiveDate>,

    /// Day/month/year display string, formatted at the fetch boundary;
    /// falls back to the wire value verbatim when it did not parse
    pub display_date: String,

    /// Seconds spent
    pub time_spent: f64,
}

impl UserActivity {
    /// Parses the backend's day/month/year display format ("25/12/2024")
    pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
    }
}

/// One point of a user's per-day activity graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivitySample {
    pub date: NaiveDate,
    /// Seconds spent on that day
    pub time_spent: f64,
}

/// A user's per-day activity series, zipped from the graph endpoint's
/// parallel arrays at the fetch boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityGraph {
    pub samples: Vec<ActivitySample>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("25/12/2024", Some((2024, 12, 25)); "padded day and month")]
    #[test_case("5/8/2024", Some((2024, 8, 5)); "unpadded day and month")]
    #[test_case(" 01/01/2025 ", Some((2025, 1, 1)); "surrounding whitespace")]
    #[test_case("2024-12-25", None; "iso format is not the display format")]
    #[test_case("31/02/2024", None; "impossible day")]
    #[test_case("", None; "empty string")]
    fn test_parse_display_date(raw: &str, expected: Option<(i32, u32, u32)>) {
        let expected =
            expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("valid date"));
        assert_eq!(UserActivity::parse_display_date(raw), expected);
    }
}
