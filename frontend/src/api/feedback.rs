use gloo_net::http::Request;
use log::debug;

use crate::api::feedback_url;
use crate::api::utils::{error_message, with_retries};
use shared::{Feedback, FeedbackDto};

/// The feedback deployment cold-starts often enough that one attempt is
/// not reliable
const FEEDBACK_ATTEMPTS: u32 = 3;

async fn fetch_feedback_once() -> Result<Vec<Feedback>, String> {
    let response = Request::get(&feedback_url("/api/feedback"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch feedback: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let feedback = response
        .json::<Vec<FeedbackDto>>()
        .await
        .map_err(|e| format!("Failed to parse feedback response: {}", e))?;

    Ok(feedback.into_iter().map(Into::into).collect())
}

pub async fn fetch_feedback() -> Result<Vec<Feedback>, String> {
    let feedback = with_retries(FEEDBACK_ATTEMPTS, |attempt| {
        debug!("Fetching feedback (attempt {})", attempt);
        fetch_feedback_once()
    })
    .await?;

    debug!("Successfully fetched {} feedback items", feedback.len());
    Ok(feedback)
}
