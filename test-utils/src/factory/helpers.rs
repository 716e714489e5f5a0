//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation, terse date/time constructors and convenience
//! methods for creating entities together with their dependencies.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a time of day with zero seconds, panicking on an invalid one.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Creates a shift role and a default shift referencing it.
///
/// # Returns
/// - `Ok((role, shift))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shift_with_role(
    db: &DatabaseConnection,
) -> Result<(entity::shift_role::Model, entity::shift::Model), DbErr> {
    let role = crate::factory::shift_role::create_shift_role(db).await?;
    let shift = crate::factory::shift::create_shift(db, role.id).await?;

    Ok((role, shift))
}

/// Creates a complete pending shift request hierarchy.
///
/// This is a convenience method that creates:
/// 1. User (worker)
/// 2. Shift role
/// 3. Shift
/// 4. Pending shift request for the user and shift
///
/// # Returns
/// - `Ok((user, role, shift, request))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_request_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::shift_role::Model,
        entity::shift::Model,
        entity::shift_request::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (role, shift) = create_shift_with_role(db).await?;
    let request = crate::factory::shift_request::create_shift_request(db, user.id, shift.id).await?;

    Ok((user, role, shift, request))
}
