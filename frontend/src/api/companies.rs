use gloo_net::http::Request;
use log::debug;

use crate::api::api_url;
use crate::api::utils::error_message;
use shared::{CompanyTime, CompanyTimeDto, DateRange};

/// Company aggregates, optionally narrowed to a validated date range. The
/// backend expects both query parameters or neither.
pub async fn fetch_company_times(range: Option<&DateRange>) -> Result<Vec<CompanyTime>, String> {
    let url = match range {
        Some(range) => format!(
            "{}?startDate={}&endDate={}",
            api_url("/api/users/companies/times"),
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d"),
        ),
        None => api_url("/api/users/companies/times"),
    };
    debug!("Fetching company times from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch company times: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let companies = response
        .json::<Vec<CompanyTimeDto>>()
        .await
        .map_err(|e| format!("Failed to parse company times: {}", e))?;

    debug!("Successfully fetched {} companies", companies.len());
    Ok(companies.into_iter().map(Into::into).collect())
}
