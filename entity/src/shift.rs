use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shifts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub role_id: i32,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub created_by: String,
    pub updated_at: Option<DateTimeUtc>,
    pub updated_by: Option<String>,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shift_role::Entity",
        from = "Column::RoleId",
        to = "super::shift_role::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ShiftRole,
    #[sea_orm(has_many = "super::shift_request::Entity")]
    ShiftRequest,
    #[sea_orm(has_many = "super::worker_shift_assignment::Entity")]
    WorkerShiftAssignment,
}

impl Related<super::shift_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftRole.def()
    }
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
