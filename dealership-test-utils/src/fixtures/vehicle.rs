use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn vehicle<'a>(&'a mut self) -> VehicleFixtures<'a> {
        VehicleFixtures { setup: self }
    }
}

pub struct VehicleFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> VehicleFixtures<'a> {
    pub async fn insert_vehicle(
        &self,
        make: &str,
        model: &str,
        year: i32,
        price_cents: i64,
        stock: i32,
    ) -> Result<entity::vehicle::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                make: ActiveValue::Set(make.to_string()),
                model: ActiveValue::Set(model.to_string()),
                year: ActiveValue::Set(year),
                price_cents: ActiveValue::Set(price_cents),
                stock: ActiveValue::Set(stock),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
