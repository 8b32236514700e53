use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_cents: i64,
    pub stock: i32,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            price_cents: vehicle.price_cents,
            stock: vehicle.stock,
        }
    }
}
