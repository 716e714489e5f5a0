use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateShiftDto {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role_id: i32,
    #[serde(default)]
    pub location: Option<String>,
}

/// Full replacement of a shift's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateShiftDto {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role_id: i32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShiftDto {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role_id: i32,
    pub role_name: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShiftRoleDto {
    pub id: i32,
    pub role_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShiftListQuery {
    /// Only return shifts without an active assignment.
    #[serde(default)]
    pub show_only_unassigned: bool,
    /// Page size, values <= 0 fall back to 10.
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
