use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A feedback submission from the product, read-only in the console
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub email: String,

    /// Star rating, nominally 1 to 5
    pub rating: f64,

    pub comment: String,

    /// Submission instant; `None` when the backend sent an unparsable value
    pub created_at: Option<DateTime<FixedOffset>>,
}
