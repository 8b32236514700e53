use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_EMAIL_DOMAIN, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user named `username`.
    ///
    /// The email is `{username}@example.com`, the name "Test User", and the password hash is a
    /// placeholder no password verifies against.
    pub async fn insert_user(
        &self,
        username: &str,
    ) -> Result<entity::dealership_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::DealershipUser::insert(entity::dealership_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!(
                    "{}@{}",
                    username.to_lowercase(),
                    TEST_EMAIL_DOMAIN
                )),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                password_hash: ActiveValue::Set("unusable".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
