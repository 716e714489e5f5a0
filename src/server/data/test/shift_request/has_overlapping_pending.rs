use super::*;

/// Tests the closed-interval overlap rule.
///
/// With a pending request on 08:00-16:00, a window that only touches its end is
/// still an overlap, while a window after it is not.
///
/// Expected: true for touching and contained windows, false for a disjoint window
#[tokio::test]
async fn detects_touching_and_contained_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_role, shift) = factory::helpers::create_shift_with_role(db).await?;
    factory::create_shift_request(db, user.id, shift.id).await?;

    let repo = ShiftRequestRepository::new(db);
    let day = shift.date;

    assert!(repo.has_overlapping_pending(user.id, day, time(16, 0), time(20, 0)).await?);
    assert!(repo.has_overlapping_pending(user.id, day, time(10, 0), time(11, 0)).await?);
    assert!(repo.has_overlapping_pending(user.id, day, time(6, 0), time(8, 0)).await?);
    assert!(!repo.has_overlapping_pending(user.id, day, time(16, 1), time(20, 0)).await?);

    Ok(())
}

/// Tests which requests take part in the overlap check.
///
/// Requests of other users, on other dates, in a non-pending state, or on a
/// soft-deleted shift are all ignored.
///
/// Expected: false for every case
#[tokio::test]
async fn ignores_unrelated_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;
    let day = date(2025, 6, 2);

    let other_users_shift = factory::create_shift(db, role.id).await?;
    factory::create_shift_request(db, other.id, other_users_shift.id).await?;

    let next_day_shift = factory::shift::ShiftFactory::new(db, role.id)
        .date(date(2025, 6, 3))
        .build()
        .await?;
    factory::create_shift_request(db, user.id, next_day_shift.id).await?;

    let approved_shift = factory::create_shift(db, role.id).await?;
    factory::shift_request::ShiftRequestFactory::new(db, user.id, approved_shift.id)
        .status(ShiftRequestStatus::Approved)
        .build()
        .await?;

    let deleted_shift = factory::shift::ShiftFactory::new(db, role.id)
        .deleted(true)
        .build()
        .await?;
    factory::create_shift_request(db, user.id, deleted_shift.id).await?;

    let overlaps = ShiftRequestRepository::new(db)
        .has_overlapping_pending(user.id, day, time(8, 0), time(16, 0))
        .await?;

    assert!(!overlaps);

    Ok(())
}
