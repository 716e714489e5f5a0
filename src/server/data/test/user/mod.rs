use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::user::UserRole;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_id;
mod get_by_role;
