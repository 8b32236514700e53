use dealership::server::{model::app::AppState, router::routes};
use dealership_test_utils::prelude::*;

pub trait TestContextExt {
    /// Client sending requests through the full router, with state built from this context
    fn client(&self) -> TestClient;
}

impl TestContextExt for TestContext {
    fn client(&self) -> TestClient {
        TestClient::new(routes().with_state(self.to_app_state::<AppState>()))
    }
}

/// Username of the admin in [`TestContext`]
pub const ADMIN: &str = "Admin";
