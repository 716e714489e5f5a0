use super::*;

/// Tests deleting a shift twice.
///
/// Expected: Ok on the first call, Err(NotFound) on the second
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_role, shift) = factory::helpers::create_shift_with_role(db).await?;
    let service = ShiftService::new(db);

    service.delete(shift.id, "admin@example.com".to_string()).await?;

    assert!(matches!(
        service.get(shift.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(shift.id, "admin@example.com".to_string()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
