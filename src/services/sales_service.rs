use gloo_net::http::Request;

use crate::models::{Sale, SalePayload, Session};
use crate::services::bearer;
use crate::utils::API_BASE;

pub async fn fetch_sales(session: &Session) -> Result<Vec<Sale>, String> {
    let url = format!("{}/sales", API_BASE);
    let response = Request::get(&url)
        .header("Authorization", &bearer(session))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<Sale>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// The payload carries the snapshot prices staged in the form, not a live
/// product lookup.
pub async fn create_sale(session: &Session, payload: &SalePayload) -> Result<(), String> {
    let url = format!("{}/sales", API_BASE);

    log::info!(
        "🧾 Recording sale: product {} x{}",
        payload.product_id,
        payload.quantity
    );

    let response = Request::post(&url)
        .header("Authorization", &bearer(session))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    Ok(())
}
