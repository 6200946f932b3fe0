use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::navigation::NavigationEntry;

/// Canonical user identity used everywhere inside the app.
///
/// The backend addresses users by email in several endpoints and some
/// payloads carry the address wrapped in literal quote characters;
/// `from_raw_email` is the single place that cleans this up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
}

impl UserIdentity {
    pub fn from_raw_email(raw: &str) -> Self {
        Self {
            email: raw.trim().trim_matches('"').to_string(),
        }
    }

    /// Company label derived from the email domain
    /// ("jane@acme.com" -> "acme").
    pub fn company_label(&self) -> String {
        self.email
            .split('@')
            .nth(1)
            .and_then(|domain| domain.split('.').next())
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Represents an administered user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Document id, used by the edit endpoint
    pub record_id: String,

    /// Numeric id, used by the reset and suspend endpoints
    pub id: i64,

    pub name: String,
    pub email: String,

    /// Raw status string from the backend ("Active", "Suspended", ...)
    pub status: String,

    /// Last login instant; `None` when the backend sent an unparsable value
    pub last_login: Option<DateTime<FixedOffset>>,

    pub balance: f64,

    /// Total tracked time in seconds
    pub accumulated_seconds: f64,

    /// Embedded navigation history, present on the overview payload only
    pub history: Vec<NavigationEntry>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }

    /// Accumulated time expressed in hours
    pub fn accumulated_hours(&self) -> f64 {
        self.accumulated_seconds / 3600.0
    }

    pub fn identity(&self) -> UserIdentity {
        UserIdentity::from_raw_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_identity_strips_quotes_and_whitespace() {
        let identity = UserIdentity::from_raw_email("  \"jane@acme.com\" ");
        assert_eq!(identity.email, "jane@acme.com");
    }

    #[rstest]
    #[case("jane@acme.com", "acme")]
    #[case("bob@mail.globex.co.uk", "mail")]
    #[case("not-an-email", "Unknown")]
    #[case("trailing@", "Unknown")]
    fn test_company_label(#[case] raw: &str, #[case] expected: &str) {
        let identity = UserIdentity::from_raw_email(raw);
        assert_eq!(identity.company_label(), expected);
    }

    #[test]
    fn test_accumulated_hours() {
        let user = User {
            record_id: "u1".to_string(),
            id: 1,
            name: "Jane".to_string(),
            email: "jane@acme.com".to_string(),
            status: "Active".to_string(),
            last_login: None,
            balance: 0.0,
            accumulated_seconds: 5400.0,
            history: Vec::new(),
        };
        assert!(user.is_active());
        assert_eq!(user.accumulated_hours(), 1.5);
    }

    #[test]
    fn test_status_comparison_is_case_insensitive() {
        let mut user = User {
            record_id: "u1".to_string(),
            id: 1,
            name: "Jane".to_string(),
            email: "jane@acme.com".to_string(),
            status: "active".to_string(),
            last_login: None,
            balance: 0.0,
            accumulated_seconds: 0.0,
            history: Vec::new(),
        };
        assert!(user.is_active());
        user.status = "Suspended".to_string();
        assert!(!user.is_active());
    }
}
