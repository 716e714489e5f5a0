use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftRequestStatusDto {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateShiftRequestDto {
    /// Worker the request is filed for; defaults to the caller.
    #[serde(default)]
    pub user_id: Option<i32>,
    pub shift_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RejectShiftRequestDto {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShiftRequestDto {
    pub id: i32,
    pub user_id: i32,
    pub shift_id: i32,
    pub status: ShiftRequestStatusDto,
    pub requested_by: String,
    pub admin_actor: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Shift request row joined with its shift and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShiftRequestListItemDto {
    pub id: i32,
    pub user_id: i32,
    pub shift_id: i32,
    pub status: ShiftRequestStatusDto,
    pub requested_by: String,
    pub admin_actor: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub shift_date: Option<NaiveDate>,
    pub shift_start_time: Option<NaiveTime>,
    pub shift_end_time: Option<NaiveTime>,
    pub shift_role_id: Option<i32>,
    pub shift_role_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShiftRequestListQuery {
    pub status: Option<ShiftRequestStatusDto>,
    pub user_id: Option<i32>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
