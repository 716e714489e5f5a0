use super::*;

/// Tests the same-day assignment check.
///
/// Expected: true on the assigned date only, and false for another user
#[tokio::test]
async fn matches_assignment_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;
    let shift = factory::shift::ShiftFactory::new(db, role.id)
        .date(date(2025, 6, 3))
        .build()
        .await?;
    factory::create_assignment(db, user.id, shift.id).await?;

    let repo = AssignmentRepository::new(db);

    assert!(repo.user_has_assignment_on(user.id, date(2025, 6, 3)).await?);
    assert!(!repo.user_has_assignment_on(user.id, date(2025, 6, 4)).await?);
    assert!(!repo.user_has_assignment_on(other.id, date(2025, 6, 3)).await?);

    Ok(())
}

/// Tests that assignments on deleted shifts are ignored.
///
/// Expected: false
#[tokio::test]
async fn ignores_deleted_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;
    let shift = factory::shift::ShiftFactory::new(db, role.id)
        .deleted(true)
        .build()
        .await?;
    factory::create_assignment(db, user.id, shift.id).await?;

    let assigned = AssignmentRepository::new(db)
        .user_has_assignment_on(user.id, shift.date)
        .await?;

    assert!(!assigned);

    Ok(())
}
