use crate::server::{
    data::{assignment::AssignmentRepository, shift_request::ShiftRequestRepository},
    error::{auth::AuthError, shift::ShiftError, AppError},
    model::{
        assignment::AssignmentFilter,
        auth::AuthUser,
        shift_request::{CreateShiftRequestParams, ShiftRequestFilter},
    },
    service::{assignment::AssignmentService, shift_request::ShiftRequestService},
};
use entity::shift_request::ShiftRequestStatus;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{date, time},
    },
};

mod approve;
mod resolve_target;
mod scenario;

const ADMIN: &str = "admin@example.com";

fn request(user: &entity::user::Model, shift_id: i32) -> CreateShiftRequestParams {
    CreateShiftRequestParams {
        user_id: user.id,
        shift_id,
        requested_by: user.email.clone(),
    }
}
