pub use sea_orm_migration::prelude::*;

mod m20251101_000001_dealership_user;
mod m20251101_000002_vehicle;
mod m20251101_000003_vehicle_order;
mod m20251101_000004_user_payment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_dealership_user::Migration),
            Box::new(m20251101_000002_vehicle::Migration),
            Box::new(m20251101_000003_vehicle_order::Migration),
            Box::new(m20251101_000004_user_payment::Migration),
        ]
    }
}
