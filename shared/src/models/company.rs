use serde::{Deserialize, Serialize};

/// Per-user slice of a company's aggregate, computed server-side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTime {
    pub email: String,

    /// Seconds across the requested range
    pub total_time: f64,

    /// Date labels as issued by the backend, shown verbatim in the report
    pub active_dates: Vec<String>,
    pub idle_dates: Vec<String>,
}

/// Aggregate time per company, computed server-side and read-only here
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyTime {
    pub company: String,
    pub total_time: f64,
    pub user_count: u32,
    pub users: Vec<UserTime>,
}
