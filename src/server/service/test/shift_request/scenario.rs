use super::*;

/// Tests the full request lifecycle for one worker.
///
/// The worker requests S1 (08:00-16:00), then S2 on the same day (09:00-10:00)
/// which overlaps and fails. The admin approves S1, which assigns it, and a later
/// attempt to reject the same request fails because it is no longer pending.
///
/// Expected: PENDING, TimeOverlap, APPROVED with assignment, NotPending
#[tokio::test]
async fn request_overlap_approve_then_reject() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;
    let day = date(2025, 6, 4);
    let s1 = factory::shift::ShiftFactory::new(db, role.id)
        .date(day)
        .times(time(8, 0), time(16, 0))
        .build()
        .await?;
    let s2 = factory::shift::ShiftFactory::new(db, role.id)
        .date(day)
        .times(time(9, 0), time(10, 0))
        .build()
        .await?;

    let service = ShiftRequestService::new(db, 5);

    let r1 = service.create(request(&worker, s1.id)).await?;
    assert_eq!(r1.status, ShiftRequestStatus::Pending);

    assert!(matches!(
        service.create(request(&worker, s2.id)).await,
        Err(AppError::ShiftErr(ShiftError::TimeOverlap))
    ));

    let approved = service.approve(r1.id, ADMIN.to_string()).await?;
    assert_eq!(approved.status, ShiftRequestStatus::Approved);
    assert!(AssignmentRepository::new(db).is_shift_assigned(s1.id).await?);

    assert!(matches!(
        service
            .reject(r1.id, "changed my mind".to_string(), ADMIN.to_string())
            .await,
        Err(AppError::ShiftErr(ShiftError::NotPending))
    ));

    Ok(())
}
