pub mod auth;
pub mod dashboard;
pub mod product;
pub mod purchase;
pub mod sale;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, Session, User};
pub use dashboard::{DashboardSummary, SummaryRow};
pub use product::{Product, ProductDraft, ProductPayload};
pub use purchase::{Purchase, PurchaseDraft, PurchasePayload, PurchasesSummary};
pub use sale::{Sale, SaleDraft, SalePayload};
