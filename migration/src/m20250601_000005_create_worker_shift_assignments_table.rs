use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_users_table::Users, m20250601_000003_create_shifts_table::Shifts,
};

/// Partial unique index allowing at most one non-deleted assignment per shift.
///
/// Exported so test databases built from entity definitions can apply the same
/// constraint as migrated ones.
pub const ACTIVE_ASSIGNMENT_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     uq_worker_shift_assignments_active_shift \
     ON worker_shift_assignments (shift_id) WHERE deleted_at IS NULL";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkerShiftAssignments::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkerShiftAssignments::Id))
                    .col(integer(WorkerShiftAssignments::UserId))
                    .col(integer(WorkerShiftAssignments::ShiftId))
                    .col(timestamp_with_time_zone(WorkerShiftAssignments::AssignedAt))
                    .col(string(WorkerShiftAssignments::AssignedBy))
                    .col(
                        timestamp_with_time_zone(WorkerShiftAssignments::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(WorkerShiftAssignments::CreatedBy))
                    .col(timestamp_with_time_zone_null(WorkerShiftAssignments::UpdatedAt))
                    .col(string_null(WorkerShiftAssignments::UpdatedBy))
                    .col(timestamp_with_time_zone_null(WorkerShiftAssignments::DeletedAt))
                    .col(string_null(WorkerShiftAssignments::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_shift_assignments_user_id")
                            .from(WorkerShiftAssignments::Table, WorkerShiftAssignments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_shift_assignments_shift_id")
                            .from(WorkerShiftAssignments::Table, WorkerShiftAssignments::ShiftId)
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
                    .name("idx_worker_shift_assignments_user_id")
                    .table(WorkerShiftAssignments::Table)
                    .col(WorkerShiftAssignments::UserId)
                    .to_owned(),
            )
            .await?;

        // sea-query has no portable partial index builder
        manager
            .get_connection()
            .execute_unprepared(ACTIVE_ASSIGNMENT_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkerShiftAssignments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkerShiftAssignments {
    Table,
    Id,
    UserId,
    ShiftId,
    AssignedAt,
    AssignedBy,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
    DeletedAt,
    DeletedBy,
}
