use super::*;

/// Tests approving a pending request.
///
/// Verifies that the request becomes APPROVED and the requester is assigned the
/// shift by the approving admin.
///
/// Expected: Ok with status APPROVED and one assignment created
#[tokio::test]
async fn approves_and_assigns() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _role, shift, pending) =
        factory::helpers::create_request_with_dependencies(db).await?;

    let approved = ShiftRequestService::new(db, 5)
        .approve(pending.id, ADMIN.to_string())
        .await?;

    assert_eq!(approved.status, ShiftRequestStatus::Approved);
    assert_eq!(approved.admin_actor.as_deref(), Some(ADMIN));

    let assignments = AssignmentService::new(db)
        .list(AssignmentFilter::default())
        .await?;
    assert_eq!(assignments.items.len(), 1);
    assert_eq!(assignments.items[0].user_id, user.id);
    assert_eq!(assignments.items[0].shift_id, shift.id);
    assert_eq!(assignments.items[0].assigned_by, ADMIN);

    Ok(())
}

/// Tests approving a request that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ShiftRequestService::new(db, 5)
        .approve(404, ADMIN.to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests approving a second request for an already assigned shift.
///
/// Verifies that the unique index turns the conflicting insert into
/// AlreadyAssigned and that the status change is rolled back.
///
/// Expected: Err(AlreadyAssigned) and the second request still PENDING
#[tokio::test]
async fn rolls_back_when_shift_taken() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let (_role, shift) = factory::helpers::create_shift_with_role(db).await?;
    let first = factory::create_shift_request(db, alice.id, shift.id).await?;
    let second = factory::create_shift_request(db, bob.id, shift.id).await?;
    let service = ShiftRequestService::new(db, 5);

    service.approve(first.id, ADMIN.to_string()).await?;
    let result = service.approve(second.id, ADMIN.to_string()).await;

    assert!(matches!(
        result,
        Err(AppError::ShiftErr(ShiftError::AlreadyAssigned))
    ));

    let second = ShiftRequestRepository::new(db)
        .find_by_id(second.id)
        .await?
        .unwrap();
    assert_eq!(second.status, ShiftRequestStatus::Pending);
    assert!(second.admin_actor.is_none());
    assert!(AssignmentRepository::new(db).is_shift_assigned(shift.id).await?);

    Ok(())
}
