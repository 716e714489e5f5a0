use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_shift_role_enum_table::ShiftRoleEnum;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shifts::Table)
                    .if_not_exists()
                    .col(pk_auto(Shifts::Id))
                    .col(date(Shifts::Date))
                    .col(time(Shifts::StartTime))
                    .col(time(Shifts::EndTime))
                    .col(integer(Shifts::RoleId))
                    .col(string_null(Shifts::Location))
                    .col(boolean(Shifts::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Shifts::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Shifts::CreatedBy))
                    .col(timestamp_with_time_zone_null(Shifts::UpdatedAt))
                    .col(string_null(Shifts::UpdatedBy))
                    .col(timestamp_with_time_zone_null(Shifts::DeletedAt))
                    .col(string_null(Shifts::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shifts_role_id")
                            .from(Shifts::Table, Shifts::RoleId)
                            .to(ShiftRoleEnum::Table, ShiftRoleEnum::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shifts_date")
                    .table(Shifts::Table)
                    .col(Shifts::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shifts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shifts {
    Table,
    Id,
    Date,
    StartTime,
    EndTime,
    RoleId,
    Location,
    IsActive,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
    DeletedAt,
    DeletedBy,
}
