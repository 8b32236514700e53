use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn payment<'a>(&'a mut self) -> PaymentFixtures<'a> {
        PaymentFixtures { setup: self }
    }
}

pub struct PaymentFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PaymentFixtures<'a> {
    pub async fn insert_payment(
        &self,
        user_id: i32,
        card_last_four: &str,
    ) -> Result<entity::user_payment::Model, TestError> {
        Ok(
            entity::prelude::UserPayment::insert(entity::user_payment::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                card_holder: ActiveValue::Set("Test User".to_string()),
                card_last_four: ActiveValue::Set(card_last_four.to_string()),
                card_expiry: ActiveValue::Set("12/30".to_string()),
                mailing_address: ActiveValue::Set("1 Test Street".to_string()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
