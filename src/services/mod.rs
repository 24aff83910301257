// SOLO HTTP communication - no business logic, no view state

pub mod auth_service;
pub mod dashboard_service;
pub mod product_service;
pub mod purchases_service;
pub mod sales_service;

pub use auth_service::*;
pub use dashboard_service::*;
pub use product_service::*;
pub use purchases_service::*;
pub use sales_service::*;

use crate::models::Session;

/// Authorization header value for protected routes.
fn bearer(session: &Session) -> String {
    format!("Bearer {}", session.token)
}
