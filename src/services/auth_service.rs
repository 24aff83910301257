use gloo_net::http::Request;

use crate::models::{LoginRequest, LoginResponse, RegisterRequest, Session};
use crate::utils::API_BASE;

/// Log in with email and password. A successful response carries the token
/// and user record that make up the session.
pub async fn login(email: &str, password: &str) -> Result<Session, String> {
    let url = format!("{}/login", API_BASE);
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in as {}", email);

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let session = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?
        .into_session()?;

    log::info!("✅ Login successful: {}", session.user.username);
    Ok(session)
}

/// Register a new operator account.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    let url = format!("{}/register", API_BASE);
    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    log::info!("✅ Account registered: {}", username);
    Ok(())
}
