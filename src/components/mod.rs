pub mod app;
pub mod dashboard_screen;
pub mod login_screen;
pub mod navbar;
pub mod products_screen;
pub mod purchases_form;
pub mod purchases_list;
pub mod purchases_screen;
pub mod register_screen;
pub mod sales_form;
pub mod sales_list;
pub mod sales_screen;

pub use app::{resolve_screen, App, Screen};
pub use dashboard_screen::DashboardScreen;
pub use login_screen::LoginScreen;
pub use navbar::Navbar;
pub use products_screen::ProductsScreen;
pub use purchases_form::PurchasesForm;
pub use purchases_list::PurchasesList;
pub use purchases_screen::PurchasesScreen;
pub use register_screen::RegisterScreen;
pub use sales_form::SalesForm;
pub use sales_list::SalesList;
pub use sales_screen::SalesScreen;
