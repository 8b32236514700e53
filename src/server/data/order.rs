use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an order
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the buying user
    /// - `vehicle_id` - Database ID of the purchased vehicle
    /// - `quantity` - Number of units bought
    /// - `total_cents` - Price paid for all units
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
        quantity: i32,
        total_cents: i64,
    ) -> Result<entity::vehicle_order::Model, DbErr> {
        let order = entity::vehicle_order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            quantity: ActiveValue::Set(quantity),
            total_cents: ActiveValue::Set(total_cents),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Orders placed by a user, newest first, with the vehicle each order is for
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::vehicle_order::Model,
            Option<entity::vehicle::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::VehicleOrder::find()
            .filter(entity::vehicle_order::Column::UserId.eq(user_id))
            .order_by_desc(entity::vehicle_order::Column::CreatedAt)
            .order_by_desc(entity::vehicle_order::Column::Id)
            .find_also_related(entity::vehicle::Entity)
            .all(self.db)
            .await
    }

    /// Every order with the vehicle it is for, used to build the sales report
    pub async fn list_with_vehicles(
        &self,
    ) -> Result<
        Vec<(
            entity::vehicle_order::Model,
            Option<entity::vehicle::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::VehicleOrder::find()
            .order_by_asc(entity::vehicle_order::Column::Id)
            .find_also_related(entity::vehicle::Entity)
            .all(self.db)
            .await
    }
}
