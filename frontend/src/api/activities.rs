use gloo_net::http::Request;
use log::debug;

use crate::api::api_url;
use crate::api::utils::error_message;
use shared::{ActivityGraph, ActivityGraphDto, UserActivity, UserActivityDto};

pub async fn fetch_activities() -> Result<Vec<UserActivity>, String> {
    debug!("Fetching user activities");

    let response = Request::get(&api_url("/api/users/activities"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch activities: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let activities = response
        .json::<Vec<UserActivityDto>>()
        .await
        .map_err(|e| format!("Failed to parse activities response: {}", e))?;

    debug!("Successfully fetched {} activities", activities.len());
    Ok(activities.into_iter().map(Into::into).collect())
}

/// Per-user daily time series for the activity graph
pub async fn fetch_activity_graph(email: &str) -> Result<ActivityGraph, String> {
    debug!("Fetching activity graph for {}", email);

    let url = format!(
        "{}/{}/graph",
        api_url("/api/users/activities"),
        urlencoding::encode(email)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch activity graph: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let graph = response
        .json::<ActivityGraphDto>()
        .await
        .map_err(|e| format!("Failed to parse activity graph: {}", e))?;

    debug!(
        "Successfully fetched {} graph points for {}",
        graph.dates.len(),
        email
    );
    Ok(graph.into())
}
