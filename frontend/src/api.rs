// Re-export all API modules
pub mod users;
pub mod activities;
pub mod companies;
pub mod navigation;
pub mod feedback;
pub mod identity;
pub mod utils;

use crate::config::Config;

fn join(base: String, path: &str) -> String {
    if base.is_empty() {
        // Relative URL, useful behind a proxy
        path.to_string()
    } else {
        format!("{}{}", base, path)
    }
}

pub fn api_url(path: &str) -> String {
    join(Config::api_base_url(), path)
}

pub fn feedback_url(path: &str) -> String {
    join(Config::feedback_base_url(), path)
}

pub fn identity_url(path: &str) -> String {
    join(Config::identity_base_url(), path)
}
