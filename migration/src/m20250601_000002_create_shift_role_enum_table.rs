use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShiftRoleEnum::Table)
                    .if_not_exists()
                    .col(pk_auto(ShiftRoleEnum::Id))
                    .col(string_uniq(ShiftRoleEnum::RoleName))
                    .col(
                        timestamp_with_time_zone(ShiftRoleEnum::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(ShiftRoleEnum::CreatedBy))
                    .col(timestamp_with_time_zone_null(ShiftRoleEnum::UpdatedAt))
                    .col(string_null(ShiftRoleEnum::UpdatedBy))
                    .col(timestamp_with_time_zone_null(ShiftRoleEnum::DeletedAt))
                    .col(string_null(ShiftRoleEnum::DeletedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShiftRoleEnum::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShiftRoleEnum {
    Table,
    Id,
    RoleName,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
    DeletedAt,
    DeletedBy,
}
