use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Assignment row joined with the assigned worker and shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShiftAssignmentDto {
    pub id: i32,
    pub user_id: i32,
    pub shift_id: i32,
    pub assigned_at: DateTime<Utc>,
    pub assigned_by: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub shift_date: Option<NaiveDate>,
    pub shift_start_time: Option<NaiveTime>,
    pub shift_end_time: Option<NaiveTime>,
    pub shift_role_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssignmentListQuery {
    pub user_id: Option<i32>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
