pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users_table;
mod m20250601_000002_create_shift_role_enum_table;
mod m20250601_000003_create_shifts_table;
mod m20250601_000004_create_shift_requests_table;
mod m20250601_000005_create_worker_shift_assignments_table;
mod m20250601_000006_create_worker_shift_availabilities_table;

pub use m20250601_000005_create_worker_shift_assignments_table::ACTIVE_ASSIGNMENT_INDEX_SQL;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users_table::Migration),
            Box::new(m20250601_000002_create_shift_role_enum_table::Migration),
            Box::new(m20250601_000003_create_shifts_table::Migration),
            Box::new(m20250601_000004_create_shift_requests_table::Migration),
            Box::new(m20250601_000005_create_worker_shift_assignments_table::Migration),
            Box::new(m20250601_000006_create_worker_shift_availabilities_table::Migration),
        ]
    }
}
