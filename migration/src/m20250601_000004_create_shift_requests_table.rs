use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_users_table::Users, m20250601_000003_create_shifts_table::Shifts,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShiftRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(ShiftRequests::Id))
                    .col(integer(ShiftRequests::UserId))
                    .col(integer(ShiftRequests::ShiftId))
                    .col(string_len(ShiftRequests::Status, 16))
                    .col(string(ShiftRequests::RequestedBy))
                    .col(string_null(ShiftRequests::AdminActor))
                    .col(text_null(ShiftRequests::RejectionReason))
                    .col(
                        timestamp_with_time_zone(ShiftRequests::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(ShiftRequests::CreatedBy))
                    .col(timestamp_with_time_zone_null(ShiftRequests::UpdatedAt))
                    .col(string_null(ShiftRequests::UpdatedBy))
                    .col(timestamp_with_time_zone_null(ShiftRequests::DeletedAt))
                    .col(string_null(ShiftRequests::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_requests_user_id")
                            .from(ShiftRequests::Table, ShiftRequests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_requests_shift_id")
                            .from(ShiftRequests::Table, ShiftRequests::ShiftId)
                            .to(Shifts::Table, Shifts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shift_requests_user_status")
                    .table(ShiftRequests::Table)
                    .col(ShiftRequests::UserId)
                    .col(ShiftRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShiftRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShiftRequests {
    Table,
    Id,
    UserId,
    ShiftId,
    Status,
    RequestedBy,
    AdminActor,
    RejectionReason,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
    DeletedAt,
    DeletedBy,
}
