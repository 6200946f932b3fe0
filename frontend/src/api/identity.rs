use gloo_net::http::Request;
use log::debug;

use crate::api::identity_url;
use crate::api::utils::error_message;
use shared::{MessageResponse, SignupRequest};

/// Onboards a new account through the identity service
pub async fn sign_up(request: &SignupRequest) -> Result<MessageResponse, String> {
    debug!("Signing up {}", request.email);

    let response = Request::post(&identity_url("/api/signup"))
        .json(request)
        .map_err(|e| format!("Failed to serialize signup request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to sign up: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let message = response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Failed to parse signup response: {}", e))?;

    debug!("Signup for {} acknowledged", request.email);
    Ok(message)
}
