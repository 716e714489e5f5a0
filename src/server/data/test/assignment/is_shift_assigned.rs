use super::*;

/// Tests the assigned-shift check.
///
/// Expected: false before assignment, true after, false for a shift whose only
/// assignment was soft-deleted
#[tokio::test]
async fn reports_active_assignments_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;
    let shift = factory::create_shift(db, role.id).await?;
    let released = factory::create_shift(db, role.id).await?;
    factory::assignment::AssignmentFactory::new(db, user.id, released.id)
        .deleted(true)
        .build()
        .await?;

    let repo = AssignmentRepository::new(db);
    assert!(!repo.is_shift_assigned(shift.id).await?);

    factory::create_assignment(db, user.id, shift.id).await?;

    assert!(repo.is_shift_assigned(shift.id).await?);
    assert!(!repo.is_shift_assigned(released.id).await?);

    Ok(())
}
