pub mod models {
    pub mod user;
    pub mod navigation;
    pub mod activity;
    pub mod company;
    pub mod feedback;
}

pub mod dto {
    pub mod user;
    pub mod navigation;
    pub mod activity;
    pub mod company;
    pub mod feedback;
    pub mod signup;
    pub mod common;
}

pub mod error;
pub mod analytics;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    user::{User, UserIdentity},
    navigation::{NavigationEntry, UserHistory},
    activity::{ActivityGraph, ActivitySample, UserActivity},
    company::{CompanyTime, UserTime},
    feedback::Feedback,
};

// Re-export DTOs
pub use dto::{
    user::{UpdateUserRequest, UserDto},
    navigation::{NavigationEntryDto, UserHistoryDto},
    activity::{ActivityGraphDto, UserActivityDto},
    company::{CompanyTimeDto, UserTimeDto},
    feedback::FeedbackDto,
    signup::SignupRequest,
    common::{ErrorResponse, MessageResponse},
};

// Re-export the analytics surface the pages consume
pub use analytics::{
    DateRange, IdlePeriod, PageStat, RangePreset, TrendPoint,
    EXCLUDED_PAGES, PAGE_PREFIX,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_creation() {
        let user = User {
            record_id: "66b1f0c2".to_string(),
            id: 7,
            name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            status: "Active".to_string(),
            last_login: Some(chrono::Utc::now().fixed_offset()),
            balance: 12.5,
            accumulated_seconds: 7200.0,
            history: Vec::new(),
        };

        assert_eq!(user.email, "jane@acme.com");
        assert_eq!(user.accumulated_hours(), 2.0);
        assert!(user.is_active());
    }

    #[test]
    fn test_navigation_entry_creation() {
        let entry = NavigationEntry {
            page: "/pbr/dashboard".to_string(),
            timestamp: chrono::Utc::now().fixed_offset(),
            time_spent: 95.0,
        };

        assert_eq!(entry.page, "/pbr/dashboard");
        assert_eq!(entry.time_spent, 95.0);
    }

    #[test]
    fn test_company_time_creation() {
        let company = CompanyTime {
            company: "acme".to_string(),
            total_time: 7200.0,
            user_count: 2,
            users: vec![UserTime {
                email: "jane@acme.com".to_string(),
                total_time: 5400.0,
                active_dates: vec!["2024-03-01".to_string()],
                idle_dates: Vec::new(),
            }],
        };

        assert_eq!(company.company, "acme");
        assert_eq!(company.users.len(), 1);
    }
}
