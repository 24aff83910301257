use gloo_net::http::Request;

use crate::models::{Product, ProductPayload, Session};
use crate::services::bearer;
use crate::utils::API_BASE;

/// Product reads are public; only writes carry the token.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let url = format!("{}/products", API_BASE);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn create_product(session: &Session, payload: &ProductPayload) -> Result<(), String> {
    let url = format!("{}/products", API_BASE);

    log::info!("📦 Creating product: {}", payload.name);

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

pub async fn update_product(
    session: &Session,
    id: u32,
    payload: &ProductPayload,
) -> Result<(), String> {
    let url = format!("{}/products/{}", API_BASE, id);

    log::info!("📦 Updating product {}: {}", id, payload.name);

    let response = Request::put(&url)
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

pub async fn delete_product(session: &Session, id: u32) -> Result<(), String> {
    let url = format!("{}/products/{}", API_BASE, id);

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
