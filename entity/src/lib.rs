//! SeaORM entity definitions for the roster database.

pub mod prelude;

pub mod shift;
pub mod shift_request;
pub mod shift_role;
pub mod user;
pub mod worker_shift_assignment;
