use gloo_net::http::Request;
use log::debug;

use crate::api::api_url;
use crate::api::utils::error_message;
use shared::{MessageResponse, UpdateUserRequest, User, UserDto};

pub async fn fetch_users() -> Result<Vec<User>, String> {
    debug!("Fetching users");

    let response = Request::get(&api_url("/api/users"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch users: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let users = response
        .json::<Vec<UserDto>>()
        .await
        .map_err(|e| format!("Failed to parse users response: {}", e))?;

    debug!("Successfully fetched {} users", users.len());
    Ok(users.into_iter().map(Into::into).collect())
}

/// Edit action; the backend addresses it by the document id
pub async fn update_user(record_id: &str, request: &UpdateUserRequest) -> Result<User, String> {
    debug!("Updating user {}", record_id);

    let response = Request::put(&format!("{}/{}", api_url("/api/users"), record_id))
        .json(request)
        .map_err(|e| format!("Failed to serialize update request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update user: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let user = response
        .json::<UserDto>()
        .await
        .map_err(|e| format!("Failed to parse updated user: {}", e))?;

    debug!("Successfully updated user {}", record_id);
    Ok(user.into())
}

/// Password reset; the backend addresses it by the numeric id and answers
/// with a human-readable message
pub async fn reset_password(id: i64) -> Result<MessageResponse, String> {
    debug!("Resetting password for user {}", id);

    let response = Request::post(&format!("{}/{}/reset", api_url("/api/users"), id))
        .send()
        .await
        .map_err(|e| format!("Failed to reset password: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let message = response
        .json::<MessageResponse>()
        .await
        .map_err(|e| format!("Failed to parse reset response: {}", e))?;

    debug!("Password reset for user {} acknowledged", id);
    Ok(message)
}

/// Suspend action; answers with the updated user record
pub async fn suspend_user(id: i64) -> Result<User, String> {
    debug!("Suspending user {}", id);

    let response = Request::post(&format!("{}/{}/suspend", api_url("/api/users"), id))
        .send()
        .await
        .map_err(|e| format!("Failed to suspend user: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let user = response
        .json::<UserDto>()
        .await
        .map_err(|e| format!("Failed to parse suspended user: {}", e))?;

    debug!("Successfully suspended user {}", id);
    Ok(user.into())
}
