pub mod session_context;
pub mod use_dashboard;
pub mod use_products;
pub mod use_purchases;
pub mod use_sales;
pub mod use_session;

pub use session_context::SessionProvider;
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
pub use use_products::{use_products, UseProductsHandle};
pub use use_purchases::{use_purchases, PurchasesData, UsePurchasesHandle};
pub use use_sales::{use_sales, SalesData, UseSalesHandle};
pub use use_session::{use_session, SessionHandle};
