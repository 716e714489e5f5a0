use crate::server::{
    data::shift::ShiftRepository,
    model::{
        pagination::PageRequest,
        shift::{CreateShiftParams, ShiftFilter, UpdateShiftParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{date, time},
    },
};

mod create;
mod get_paginated;
mod soft_delete;
