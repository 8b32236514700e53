use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_dealership_user::DealershipUser, m20251101_000002_vehicle::Vehicle};

static IDX_VEHICLE_ORDER_USER_ID: &str = "idx-vehicle_order-user_id";
static IDX_VEHICLE_ORDER_VEHICLE_ID: &str = "idx-vehicle_order-vehicle_id";
static FK_VEHICLE_ORDER_USER_ID: &str = "fk-vehicle_order-user_id";
static FK_VEHICLE_ORDER_VEHICLE_ID: &str = "fk-vehicle_order-vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleOrder::Id))
                    .col(integer(VehicleOrder::UserId))
                    .col(integer(VehicleOrder::VehicleId))
                    .col(integer(VehicleOrder::Quantity))
                    .col(big_integer(VehicleOrder::TotalCents))
                    .col(timestamp(VehicleOrder::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_ORDER_USER_ID)
                    .table(VehicleOrder::Table)
                    .col(VehicleOrder::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_ORDER_VEHICLE_ID)
                    .table(VehicleOrder::Table)
                    .col(VehicleOrder::VehicleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_ORDER_USER_ID)
                    .from_tbl(VehicleOrder::Table)
                    .from_col(VehicleOrder::UserId)
                    .to_tbl(DealershipUser::Table)
                    .to_col(DealershipUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_ORDER_VEHICLE_ID)
                    .from_tbl(VehicleOrder::Table)
                    .from_col(VehicleOrder::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLE_ORDER_VEHICLE_ID)
                    .table(VehicleOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLE_ORDER_USER_ID)
                    .table(VehicleOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLE_ORDER_VEHICLE_ID)
                    .table(VehicleOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLE_ORDER_USER_ID)
                    .table(VehicleOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VehicleOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VehicleOrder {
    Table,
    Id,
    UserId,
    VehicleId,
    Quantity,
    TotalCents,
    CreatedAt,
}
