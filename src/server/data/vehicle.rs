use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Fields required to add a vehicle to the inventory.
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_cents: i64,
    pub stock: i32,
}

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let vehicle = entity::vehicle::ActiveModel {
            make: ActiveValue::Set(vehicle.make),
            model: ActiveValue::Set(vehicle.model),
            year: ActiveValue::Set(vehicle.year),
            price_cents: ActiveValue::Set(vehicle.price_cents),
            stock: ActiveValue::Set(vehicle.stock),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Lists the whole inventory ordered by make, model and year
    pub async fn list(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Make)
            .order_by_asc(entity::vehicle::Column::Model)
            .order_by_asc(entity::vehicle::Column::Year)
            .all(self.db)
            .await
    }

    /// Lists vehicles with at least one unit in stock
    pub async fn list_in_stock(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Stock.gt(0))
            .order_by_asc(entity::vehicle::Column::Make)
            .order_by_asc(entity::vehicle::Column::Model)
            .order_by_asc(entity::vehicle::Column::Year)
            .all(self.db)
            .await
    }

    /// Sets the stock level and, when provided, the price of a vehicle
    ///
    /// Returns `None` if the vehicle does not exist.
    pub async fn set_stock_and_price(
        &self,
        vehicle_id: i32,
        stock: i32,
        price_cents: Option<i64>,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let Some(vehicle) = self.get_by_id(vehicle_id).await? else {
            return Ok(None);
        };

        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.stock = ActiveValue::Set(stock);
        if let Some(price_cents) = price_cents {
            vehicle_am.price_cents = ActiveValue::Set(price_cents);
        }
        vehicle_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(vehicle_am.update(self.db).await?))
    }

    /// Removes `quantity` units from stock if at least that many are available
    ///
    /// The check and the decrement happen in a single conditional `UPDATE`, so two buyers
    /// can never take the same last unit.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was decremented
    /// - `Ok(false)` - Vehicle does not exist or has fewer than `quantity` units
    pub async fn decrement_stock(&self, vehicle_id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::update_many()
            .col_expr(
                entity::vehicle::Column::Stock,
                Expr::col(entity::vehicle::Column::Stock).sub(quantity),
            )
            .col_expr(
                entity::vehicle::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::vehicle::Column::Id.eq(vehicle_id))
            .filter(entity::vehicle::Column::Stock.gte(quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
