use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::order::{OrderDto, SalesDto, SalesReportDto},
    server::{data::order::OrderRepository, error::Error},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Units sold and revenue per vehicle, plus overall totals.
    ///
    /// Rows are ordered by revenue, highest first, with ties broken by vehicle ID.
    pub async fn sales_report(&self) -> Result<SalesReportDto, Error> {
        let orders = OrderRepository::new(self.db).list_with_vehicles().await?;

        let mut by_vehicle: BTreeMap<i32, SalesDto> = BTreeMap::new();
        for (order, vehicle) in orders {
            let Some(vehicle) = vehicle else {
                continue;
            };

            let row = by_vehicle.entry(vehicle.id).or_insert_with(|| SalesDto {
                vehicle_id: vehicle.id,
                make: vehicle.make,
                model: vehicle.model,
                year: vehicle.year,
                units_sold: 0,
                revenue_cents: 0,
            });
            row.units_sold = row.units_sold.saturating_add(i64::from(order.quantity));
            row.revenue_cents = row.revenue_cents.saturating_add(order.total_cents);
        }

        let mut rows: Vec<SalesDto> = by_vehicle.into_values().collect();
        rows.sort_by(|a, b| {
            b.revenue_cents
                .cmp(&a.revenue_cents)
                .then(a.vehicle_id.cmp(&b.vehicle_id))
        });

        Ok(SalesReportDto {
            total_units: rows
                .iter()
                .fold(0_i64, |total, row| total.saturating_add(row.units_sold)),
            total_revenue_cents: rows
                .iter()
                .fold(0_i64, |total, row| total.saturating_add(row.revenue_cents)),
            rows,
        })
    }

    /// Every order joined with its vehicle, oldest first
    pub async fn order_data(&self) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db).list_with_vehicles().await?;

        Ok(orders
            .into_iter()
            .filter_map(|(order, vehicle)| vehicle.map(|vehicle| OrderDto::from((order, vehicle))))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    mod sales_report {
        use dealership_test_utils::prelude::*;

        use crate::server::{error::Error, service::report::ReportService};

        /// Expect an empty report with zero totals when nothing was sold
        #[tokio::test]
        async fn returns_empty_report() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_dealership_tables()
                .with_vehicle("Kia", "Rio", 2020, 1_500_000, 2)
                .build()
                .await?;

            let report = ReportService::new(&test.db).sales_report().await.unwrap();

            assert!(report.rows.is_empty());
            assert_eq!(report.total_units, 0);
            assert_eq!(report.total_revenue_cents, 0);

            Ok(())
        }

        /// Expect orders grouped per vehicle and sorted by revenue
        #[tokio::test]
        async fn aggregates_orders_per_vehicle() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_dealership_tables().build().await?;
            let user = test.user().insert_user("buyer").await?;
            let cheap = test
                .vehicle()
                .insert_vehicle("Kia", "Rio", 2020, 1_500_000, 10)
                .await?;
            let pricey = test
                .vehicle()
                .insert_vehicle("BMW", "M3", 2024, 7_000_000, 10)
                .await?;
            test.order().insert_order(user.id, &cheap, 2).await?;
            test.order().insert_order(user.id, &cheap, 1).await?;
            test.order().insert_order(user.id, &pricey, 1).await?;

            let report = ReportService::new(&test.db).sales_report().await.unwrap();

            assert_eq!(report.rows.len(), 2);
            assert_eq!(report.rows[0].vehicle_id, pricey.id);
            assert_eq!(report.rows[0].revenue_cents, 7_000_000);
            assert_eq!(report.rows[1].units_sold, 3);
            assert_eq!(report.rows[1].revenue_cents, 4_500_000);
            assert_eq!(report.total_units, 4);
            assert_eq!(report.total_revenue_cents, 11_500_000);

            Ok(())
        }

        /// Expect revenue to cap at i64::MAX for rows stored before prices were bounded
        #[tokio::test]
        async fn caps_revenue_instead_of_overflowing() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_dealership_tables().build().await?;
            let user = test.user().insert_user("buyer").await?;
            let vehicle = test
                .vehicle()
                .insert_vehicle("Bugatti", "Chiron", 2024, i64::MAX, 10)
                .await?;
            test.order().insert_order(user.id, &vehicle, 1).await?;
            test.order().insert_order(user.id, &vehicle, 1).await?;

            let report = ReportService::new(&test.db).sales_report().await.unwrap();

            assert_eq!(report.rows[0].revenue_cents, i64::MAX);
            assert_eq!(report.total_revenue_cents, i64::MAX);

            Ok(())
        }

        /// Expect a database error when tables are missing
        #[tokio::test]
        async fn fails_without_tables() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let result = ReportService::new(&test.db).sales_report().await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }

    mod order_data {
        use dealership_test_utils::prelude::*;

        use crate::server::service::report::ReportService;

        /// Expect every order with vehicle make and model
        #[tokio::test]
        async fn lists_orders_with_vehicles() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_dealership_tables().build().await?;
            let user = test.user().insert_user("buyer").await?;
            let vehicle = test
                .vehicle()
                .insert_vehicle("Mazda", "MX-5", 2022, 2_800_000, 5)
                .await?;
            test.order().insert_order(user.id, &vehicle, 1).await?;

            let orders = ReportService::new(&test.db).order_data().await.unwrap();

            assert_eq!(orders.len(), 1);
            assert_eq!(orders[0].model, "MX-5");
            assert_eq!(orders[0].total_cents, 2_800_000);

            Ok(())
        }
    }
}
