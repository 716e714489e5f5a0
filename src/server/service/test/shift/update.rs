use super::*;

/// Tests reactivating a shift through an update.
///
/// Expected: Ok with is_active restored to true
#[tokio::test]
async fn reactivates_shift() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_shift_role(db).await?;
    let shift = factory::shift::ShiftFactory::new(db, role.id)
        .is_active(false)
        .build()
        .await?;

    let updated = ShiftService::new(db)
        .update(UpdateShiftParams {
            id: shift.id,
            date: shift.date,
            start_time: shift.start_time,
            end_time: shift.end_time,
            role_id: role.id,
            location: shift.location.clone(),
            is_active: true,
            actor: "admin@example.com".to_string(),
        })
        .await?;

    assert!(updated.is_active);

    Ok(())
}

/// Tests updating a deleted shift.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_deleted_shift() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_shift_role(db).await?;
    let shift = factory::shift::ShiftFactory::new(db, role.id)
        .deleted(true)
        .build()
        .await?;

    let result = ShiftService::new(db)
        .update(UpdateShiftParams {
            id: shift.id,
            date: shift.date,
            start_time: time(8, 0),
            end_time: time(12, 0),
            role_id: role.id,
            location: None,
            is_active: true,
            actor: "admin@example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the time range rule on update.
///
/// Expected: Err(InvalidTimeRange)
#[tokio::test]
async fn rejects_inverted_times() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, shift) = factory::helpers::create_shift_with_role(db).await?;

    let result = ShiftService::new(db)
        .update(UpdateShiftParams {
            id: shift.id,
            date: shift.date,
            start_time: time(18, 0),
            end_time: time(10, 0),
            role_id: role.id,
            location: None,
            is_active: true,
            actor: "admin@example.com".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ShiftErr(ShiftError::InvalidTimeRange))
    ));

    Ok(())
}

/// Tests moving a shift to a date at the edge of the supported range.
///
/// Expected: Err(DateOutOfRange) with the stored date unchanged
#[tokio::test]
async fn rejects_date_without_representable_week() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_shift_role(db).await?;
    let shift = factory::create_shift(db, role.id).await?;
    let service = ShiftService::new(db);

    let result = service
        .update(UpdateShiftParams {
            id: shift.id,
            date: chrono::NaiveDate::MIN,
            start_time: shift.start_time,
            end_time: shift.end_time,
            role_id: role.id,
            location: None,
            is_active: true,
            actor: "admin@example.com".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ShiftErr(ShiftError::DateOutOfRange))
    ));
    assert_eq!(service.get(shift.id).await?.date, shift.date);

    Ok(())
}
