use super::*;

/// Tests counting approved requests within a date range.
///
/// Only approved requests on live shifts whose date is inside the inclusive range
/// count.
///
/// Expected: 2 (Monday and Sunday of the week)
#[tokio::test]
async fn counts_approved_requests_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;

    for (day, status, deleted) in [
        (date(2025, 6, 2), ShiftRequestStatus::Approved, false),
        (date(2025, 6, 8), ShiftRequestStatus::Approved, false),
        (date(2025, 6, 9), ShiftRequestStatus::Approved, false),
        (date(2025, 6, 4), ShiftRequestStatus::Pending, false),
        (date(2025, 6, 5), ShiftRequestStatus::Rejected, false),
        (date(2025, 6, 6), ShiftRequestStatus::Approved, true),
    ] {
        let shift = factory::shift::ShiftFactory::new(db, role.id)
            .date(day)
            .deleted(deleted)
            .build()
            .await?;
        factory::shift_request::ShiftRequestFactory::new(db, user.id, shift.id)
            .status(status)
            .build()
            .await?;
    }

    let count = ShiftRequestRepository::new(db)
        .count_approved_between(user.id, date(2025, 6, 2), date(2025, 6, 8))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
