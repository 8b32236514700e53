use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A placed order together with the vehicle it was placed for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub make: String,
    pub model: String,
    pub quantity: i32,
    pub total_cents: i64,
    pub created_at: NaiveDateTime,
}

/// Units sold and revenue for a single vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SalesDto {
    pub vehicle_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub units_sold: i64,
    pub revenue_cents: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SalesReportDto {
    pub rows: Vec<SalesDto>,
    pub total_units: i64,
    pub total_revenue_cents: i64,
}

impl From<(entity::vehicle_order::Model, entity::vehicle::Model)> for OrderDto {
    fn from((order, vehicle): (entity::vehicle_order::Model, entity::vehicle::Model)) -> Self {
        Self {
            id: order.id,
            vehicle_id: order.vehicle_id,
            make: vehicle.make,
            model: vehicle.model,
            quantity: order.quantity,
            total_cents: order.total_cents,
            created_at: order.created_at,
        }
    }
}
