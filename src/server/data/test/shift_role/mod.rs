use crate::server::data::shift_role::ShiftRoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
