use sea_orm::entity::prelude::*;

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "WORKER")]
    Worker,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTimeUtc,
    pub created_by: String,
    pub updated_at: Option<DateTimeUtc>,
    pub updated_by: Option<String>,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shift_request::Entity")]
    ShiftRequest,
    #[sea_orm(has_many = "super::worker_shift_assignment::Entity")]
    WorkerShiftAssignment,
}

impl Related<super::shift_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftRequest.def()
    }
}

impl Related<super::worker_shift_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkerShiftAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
