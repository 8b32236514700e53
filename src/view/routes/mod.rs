pub mod account;
pub mod admin;
pub mod auth;
pub mod home;
pub mod no_permission;

pub use account::{PurchasePage, UpdatePaymentPage};
pub use admin::{SalesReportPage, UpdateUserPage, VehicleInventoryPage};
pub use auth::{ForgotPasswordPage, SignInPage, SignUpPage};
pub use home::HomePage;
pub use no_permission::NoPermissionPage;
