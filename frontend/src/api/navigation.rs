use gloo_net::http::Request;
use log::debug;
use serde::Deserialize;

use crate::api::api_url;
use crate::api::utils::error_message;
use shared::{NavigationEntry, NavigationEntryDto, UserHistory, UserHistoryDto, UserIdentity};

/// The per-user endpoint has answered with two shapes over time: a flat
/// entry list, or the grouped all-users form. Grouped is tried first since
/// its items never parse as entries (and vice versa).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryPayload {
    Grouped(Vec<UserHistoryDto>),
    Flat(Vec<NavigationEntryDto>),
}

impl HistoryPayload {
    fn entries_for(self, email: &str) -> Vec<NavigationEntry> {
        match self {
            HistoryPayload::Flat(entries) => entries.into_iter().map(Into::into).collect(),
            HistoryPayload::Grouped(groups) => {
                let wanted = UserIdentity::from_raw_email(email);
                groups
                    .into_iter()
                    .map(UserHistory::from)
                    .find(|history| history.user == wanted)
                    .map(|history| history.entries)
                    .unwrap_or_default()
            }
        }
    }
}

/// One user's raw navigation history
pub async fn fetch_user_history(email: &str) -> Result<Vec<NavigationEntry>, String> {
    debug!("Fetching navigation history for {}", email);

    let url = format!(
        "{}/{}",
        api_url("/api/users/navigation"),
        urlencoding::encode(email)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch navigation history: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let payload = response
        .json::<HistoryPayload>()
        .await
        .map_err(|e| format!("Failed to parse navigation history: {}", e))?;

    let entries = payload.entries_for(email);
    debug!("Successfully fetched {} entries for {}", entries.len(), email);
    Ok(entries)
}

/// Grouped histories for every tracked user
pub async fn fetch_all_histories() -> Result<Vec<UserHistory>, String> {
    debug!("Fetching navigation histories for all users");

    let response = Request::get(&api_url("/api/users/navigation"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch navigation histories: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let groups = response
        .json::<Vec<UserHistoryDto>>()
        .await
        .map_err(|e| format!("Failed to parse navigation histories: {}", e))?;

    debug!("Successfully fetched {} user histories", groups.len());
    Ok(groups.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_payload_sniffing() {
        let payload: HistoryPayload = serde_json::from_str(
            r#"[{"page": "/pbr/dashboard", "timestamp": "2024-03-05T10:00:00+00:00", "timeSpent": 30}]"#,
        )
        .expect("valid payload");
        let entries = payload.entries_for("jane@acme.com");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page, "/pbr/dashboard");
    }

    #[test]
    fn test_grouped_payload_sniffing_picks_the_requested_user() {
        let payload: HistoryPayload = serde_json::from_str(
            r#"[
                {"email": "joe@acme.com", "navigationHistory": [{"page": "/pbr/a"}]},
                {"email": "jane@acme.com", "navigationHistory": [{"page": "/pbr/b"}, {"page": "/pbr/c"}]}
            ]"#,
        )
        .expect("valid payload");
        let entries = payload.entries_for("jane@acme.com");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].page, "/pbr/b");
    }

    #[test]
    fn test_grouped_payload_without_the_user_is_empty() {
        let payload: HistoryPayload = serde_json::from_str(
            r#"[{"email": "joe@acme.com", "navigationHistory": [{"page": "/pbr/a"}]}]"#,
        )
        .expect("valid payload");
        assert_eq!(payload.entries_for("jane@acme.com").len(), 0);
    }

    #[test]
    fn test_legacy_url_entries_parse_as_flat() {
        let payload: HistoryPayload =
            serde_json::from_str(r#"[{"url": "/pbr/reports"}]"#).expect("valid payload");
        let entries = payload.entries_for("jane@acme.com");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page, "/pbr/reports");
    }
}
