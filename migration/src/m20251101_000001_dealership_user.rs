use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DealershipUser::Table)
                    .if_not_exists()
                    .col(pk_auto(DealershipUser::Id))
                    .col(string_uniq(DealershipUser::Username))
                    .col(string_uniq(DealershipUser::Email))
                    .col(string(DealershipUser::FirstName))
                    .col(string(DealershipUser::LastName))
                    .col(string(DealershipUser::PasswordHash))
                    .col(timestamp(DealershipUser::CreatedAt))
                    .col(timestamp(DealershipUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DealershipUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DealershipUser {
    Table,
    Id,
    Username,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
