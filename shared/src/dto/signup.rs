use serde::{Deserialize, Serialize};
use validator::Validate;

/// Onboarding request sent to the identity endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct SignupRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    /// Markets the account covers; at least one must be selected
    #[validate(length(min = 1, message = "Select at least one country"))]
    pub countries: Vec<String>,

    /// Product modules unlocked for the account; optional
    #[serde(default)]
    pub modules: Vec<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}
