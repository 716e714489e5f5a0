use super::*;

/// Tests filing a request.
///
/// Expected: Ok with a pending request recording the requester
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_role, shift) = factory::helpers::create_shift_with_role(db).await?;

    let request = ShiftRequestRepository::new(db)
        .create(CreateShiftRequestParams {
            user_id: user.id,
            shift_id: shift.id,
            requested_by: user.email.clone(),
        })
        .await?;

    assert_eq!(request.user_id, user.id);
    assert_eq!(request.shift_id, shift.id);
    assert_eq!(request.status, ShiftRequestStatus::Pending);
    assert_eq!(request.requested_by, user.email);
    assert!(request.admin_actor.is_none());
    assert!(request.rejection_reason.is_none());

    Ok(())
}
