use gloo_net::http::Request;

use crate::models::{DashboardSummary, Session};
use crate::services::bearer;
use crate::utils::API_BASE;

pub async fn fetch_dashboard(session: &Session) -> Result<DashboardSummary, String> {
    let url = format!("{}/dashboard", API_BASE);
    let response = Request::get(&url)
        .header("Authorization", &bearer(session))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<DashboardSummary>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
