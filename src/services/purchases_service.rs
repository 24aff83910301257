use gloo_net::http::Request;

use crate::models::{Purchase, PurchasePayload, Session};
use crate::services::bearer;
use crate::utils::API_BASE;

pub async fn fetch_purchases(session: &Session) -> Result<Vec<Purchase>, String> {
    let url = format!("{}/purchases", API_BASE);
    let response = Request::get(&url)
        .header("Authorization", &bearer(session))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<Purchase>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create_purchase(session: &Session, payload: &PurchasePayload) -> Result<(), String> {
    let url = format!("{}/purchases", API_BASE);

    log::info!(
        "🚚 Recording purchase: product {} x{}",
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

pub async fn delete_purchase(session: &Session, id: u32) -> Result<(), String> {
    let url = format!("{}/purchases/{}", API_BASE, id);

    let response = Request::delete(&url)
        .header("Authorization", &bearer(session))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    Ok(())
}
