use crate::server::{
    data::shift_request::ShiftRequestRepository,
    model::{
        pagination::PageRequest,
        shift_request::{CreateShiftRequestParams, ReviewDecision, ShiftRequestFilter},
    },
};
use chrono::{Duration, Utc};
use entity::shift_request::ShiftRequestStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{date, time},
    },
};

mod count_approved_between;
mod create;
mod has_overlapping_pending;
