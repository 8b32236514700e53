//! Values shared between the test fixtures and the application under test.
//!
//! These mirror the defaults of the dealership server so tests can build sessions and cookies
//! the same way the server does.

/// Administrative identity the test application state is built with.
pub static TEST_ADMIN_USERNAME: &str = "Admin";

/// Name of the session cookie set by the dealership server.
pub static SESSION_COOKIE_NAME: &str = "dealership_session";

/// Session key holding the signed-in username.
pub static SESSION_USERNAME_KEY: &str = "username";

/// Domain of the email addresses given to fixture users.
pub static TEST_EMAIL_DOMAIN: &str = "example.com";
