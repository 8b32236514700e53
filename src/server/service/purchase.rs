use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::order::OrderDto,
    server::{
        data::{order::OrderRepository, user::UserRepository, vehicle::VehicleRepository},
        error::{order::OrderError, Error},
        model::form::MAX_ORDER_QUANTITY,
    },
};

pub struct PurchaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseService<'a> {
    /// Creates a new instance of [`PurchaseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for `quantity` units of a vehicle on behalf of `username`.
    ///
    /// Stock is decremented and the order recorded in one transaction; any failure leaves
    /// both untouched.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - The recorded order
    /// - `Err(Error::OrderError)` - Quantity out of range, unknown customer or vehicle, not
    ///   enough stock, or a total that does not fit in cents
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn purchase(
        &self,
        username: &str,
        vehicle_id: i32,
        quantity: i32,
    ) -> Result<OrderDto, Error> {
        if !(1..=MAX_ORDER_QUANTITY).contains(&quantity) {
            return Err(OrderError::InvalidQuantity {
                max: MAX_ORDER_QUANTITY,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .get_by_username(username)
            .await?
            .ok_or_else(|| OrderError::UnknownCustomer(username.to_string()))?;

        let vehicle_repository = VehicleRepository::new(&txn);
        let vehicle = vehicle_repository
            .get_by_id(vehicle_id)
            .await?
            .ok_or(OrderError::VehicleNotFound(vehicle_id))?;

        let total_cents = vehicle
            .price_cents
            .checked_mul(i64::from(quantity))
            .ok_or(OrderError::TotalTooLarge)?;

        if !vehicle_repository
            .decrement_stock(vehicle_id, quantity)
            .await?
        {
            return Err(OrderError::OutOfStock {
                requested: quantity,
                available: vehicle.stock,
            }
            .into());
        }

        let order = OrderRepository::new(&txn)
            .create(user.id, vehicle.id, quantity, total_cents)
            .await?;

        txn.commit().await?;

        tracing::info!(
            order_id = order.id,
            vehicle_id = vehicle.id,
            quantity = quantity,
            "Order placed"
        );

        Ok(OrderDto::from((order, vehicle)))
    }
}
