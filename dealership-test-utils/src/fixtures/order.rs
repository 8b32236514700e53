use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn order<'a>(&'a mut self) -> OrderFixtures<'a> {
        OrderFixtures { setup: self }
    }
}

pub struct OrderFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> OrderFixtures<'a> {
    /// Insert an order of `quantity` units at the vehicle's current price.
    ///
    /// Stock is left untouched.
    pub async fn insert_order(
        &self,
        user_id: i32,
        vehicle: &entity::vehicle::Model,
        quantity: i32,
    ) -> Result<entity::vehicle_order::Model, TestError> {
        Ok(
            entity::prelude::VehicleOrder::insert(entity::vehicle_order::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                vehicle_id: ActiveValue::Set(vehicle.id),
                quantity: ActiveValue::Set(quantity),
                total_cents: ActiveValue::Set(vehicle.price_cents * i64::from(quantity)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
