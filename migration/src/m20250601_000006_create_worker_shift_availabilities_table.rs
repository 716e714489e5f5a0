use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkerShiftAvailabilities::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkerShiftAvailabilities::Id))
                    .col(integer(WorkerShiftAvailabilities::UserId))
                    .col(date(WorkerShiftAvailabilities::AvailableDateFrom))
                    .col(date(WorkerShiftAvailabilities::AvailableDateTo))
                    .col(time_null(WorkerShiftAvailabilities::AvailableTimeFrom))
                    .col(time_null(WorkerShiftAvailabilities::AvailableTimeTo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_shift_availabilities_user_id")
                            .from(
                                WorkerShiftAvailabilities::Table,
                                WorkerShiftAvailabilities::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkerShiftAvailabilities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkerShiftAvailabilities {
    Table,
    Id,
    UserId,
    AvailableDateFrom,
    AvailableDateTo,
    AvailableTimeFrom,
    AvailableTimeTo,
}
