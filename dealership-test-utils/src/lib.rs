pub mod builder;
pub mod client;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use client::{TestClient, TestResponse};
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestClient, TestContext, TestError, TestResponse};
}
