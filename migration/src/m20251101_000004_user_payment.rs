use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_dealership_user::DealershipUser;

static FK_USER_PAYMENT_USER_ID: &str = "fk-user_payment-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPayment::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPayment::Id))
                    .col(integer_uniq(UserPayment::UserId))
                    .col(string(UserPayment::CardHolder))
                    .col(string(UserPayment::CardLastFour))
                    .col(string(UserPayment::CardExpiry))
                    .col(text(UserPayment::MailingAddress))
                    .col(timestamp(UserPayment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PAYMENT_USER_ID)
                    .from_tbl(UserPayment::Table)
                    .from_col(UserPayment::UserId)
                    .to_tbl(DealershipUser::Table)
                    .to_col(DealershipUser::Id)
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
                    .name(FK_USER_PAYMENT_USER_ID)
                    .table(UserPayment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserPayment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserPayment {
    Table,
    Id,
    UserId,
    CardHolder,
    CardLastFour,
    CardExpiry,
    MailingAddress,
    UpdatedAt,
}
