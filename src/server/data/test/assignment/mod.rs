use crate::server::{
    data::assignment::AssignmentRepository,
    model::{assignment::AssignmentFilter, pagination::PageRequest},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{date, time},
    },
};

mod get_paginated;
mod is_shift_assigned;
mod user_has_assignment_on;
