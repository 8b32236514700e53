use chrono::{Datelike, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::vehicle::VehicleDto,
    server::{
        data::vehicle::{NewVehicle, VehicleRepository},
        error::{inventory::InventoryError, Error},
        model::form::{RestockForm, VehicleForm},
    },
};

/// First year a production automobile was sold.
const FIRST_MODEL_YEAR: i32 = 1886;

/// Highest accepted vehicle price, $100,000,000.00 in cents.
///
/// Keeps `price * MAX_ORDER_QUANTITY` and the sales report sums far from `i64::MAX`.
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whole inventory, including vehicles that are sold out
    pub async fn list(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).list().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Vehicles that can currently be purchased
    pub async fn list_in_stock(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).list_in_stock().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Validates the vehicle form and adds the vehicle to the inventory.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The stored vehicle
    /// - `Err(Error::InventoryError)` - A field is missing or out of range
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn add_vehicle(&self, form: &VehicleForm) -> Result<VehicleDto, Error> {
        let make = required_text(&form.make, "make")?;
        let model = required_text(&form.model, "model")?;
        let year = parse_year(&form.year)?;
        let price_cents = parse_price_cents(&form.price)?;
        let stock = parse_stock(&form.stock)?;

        let vehicle = VehicleRepository::new(self.db)
            .create(NewVehicle {
                make,
                model,
                year,
                price_cents,
                stock,
            })
            .await?;

        tracing::info!(vehicle_id = vehicle.id, "Added vehicle to inventory");

        Ok(vehicle.into())
    }

    /// Sets the stock level of an existing vehicle and optionally its price.
    ///
    /// An empty price field keeps the current price.
    pub async fn restock(&self, form: &RestockForm) -> Result<VehicleDto, Error> {
        let vehicle_id = form
            .vehicle_id
            .trim()
            .parse::<i32>()
            .map_err(|_| InventoryError::InvalidField {
                field: "vehicle",
                reason: "choose a vehicle from the list",
            })?;
        let stock = parse_stock(&form.stock)?;
        let price_cents = match form.price.trim() {
            "" => None,
            price => Some(parse_price_cents(price)?),
        };

        let vehicle = VehicleRepository::new(self.db)
            .set_stock_and_price(vehicle_id, stock, price_cents)
            .await?
            .ok_or(InventoryError::VehicleNotFound(vehicle_id))?;

        tracing::info!(vehicle_id = vehicle.id, stock = vehicle.stock, "Restocked vehicle");

        Ok(vehicle.into())
    }
}

fn required_text(value: &str, field: &'static str) -> Result<String, InventoryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InventoryError::InvalidField {
            field,
            reason: "must not be empty",
        });
    }

    Ok(value.to_string())
}

fn parse_year(value: &str) -> Result<i32, InventoryError> {
    let latest_model_year = Utc::now().year() + 1;

    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|year| (FIRST_MODEL_YEAR..=latest_model_year).contains(year))
        .ok_or(InventoryError::InvalidField {
            field: "year",
            reason: "must be a model year between 1886 and next year",
        })
}

fn parse_stock(value: &str) -> Result<i32, InventoryError> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|stock| *stock >= 0)
        .ok_or(InventoryError::InvalidField {
            field: "stock",
            reason: "must be a whole number of zero or more",
        })
}

/// Parses a price in dollars, with at most two decimal places, into cents.
///
/// Accepts an optional leading `$` and `,` thousands separators: `"$24,999.5"` is `2_499_950`.
pub(crate) fn parse_price_cents(value: &str) -> Result<i64, InventoryError> {
    const INVALID: InventoryError = InventoryError::InvalidField {
        field: "price",
        reason: "must be a positive amount in dollars",
    };

    let value = value.trim();
    let value = value.strip_prefix('$').unwrap_or(value).replace(',', "");

    let (dollars, cents) = match value.split_once('.') {
        Some((dollars, cents)) => (dollars, cents),
        None => (value.as_str(), ""),
    };

    if dollars.is_empty()
        || cents.len() > 2
        || !dollars.chars().all(|c| c.is_ascii_digit())
        || !cents.chars().all(|c| c.is_ascii_digit())
    {
        return Err(INVALID);
    }

    let dollars = dollars.parse::<i64>().map_err(|_| INVALID)?;
    let cents = match cents.len() {
        0 => 0,
        1 => cents.parse::<i64>().map_err(|_| INVALID)? * 10,
        _ => cents.parse::<i64>().map_err(|_| INVALID)?,
    };

    let total = dollars
        .checked_mul(100)
        .and_then(|total| total.checked_add(cents))
        .ok_or(INVALID)?;
    if total == 0 {
        return Err(INVALID);
    }
    if total > MAX_PRICE_CENTS {
        return Err(InventoryError::InvalidField {
            field: "price",
            reason: "must not exceed $100,000,000.00",
        });
    }

    Ok(total)
}
