use super::*;

/// Tests a worker filing without naming a user.
///
/// Expected: Ok with the worker's own id
#[tokio::test]
async fn worker_defaults_to_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::create_user(db).await?;
    let caller = AuthUser::from_entity(worker.clone());
    let service = ShiftRequestService::new(db, 5);

    assert_eq!(service.resolve_target(&caller, None).await?, worker.id);
    assert_eq!(service.resolve_target(&caller, Some(worker.id)).await?, worker.id);

    Ok(())
}

/// Tests a worker filing on behalf of another user.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn worker_cannot_file_for_another_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let caller = AuthUser::from_entity(worker);

    let result = ShiftRequestService::new(db, 5)
        .resolve_target(&caller, Some(other.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests an admin filing for an existing and for a missing user.
///
/// Expected: Ok with the named id, then Err(NotFound)
#[tokio::test]
async fn admin_names_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let worker = factory::create_user(db).await?;
    let caller = AuthUser::from_entity(admin.clone());
    let service = ShiftRequestService::new(db, 5);

    assert_eq!(service.resolve_target(&caller, Some(worker.id)).await?, worker.id);
    assert_eq!(service.resolve_target(&caller, None).await?, admin.id);
    assert!(matches!(
        service.resolve_target(&caller, Some(worker.id + 100)).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the static admin identity filing a request.
///
/// Expected: Err(BadRequest) without a user id, Ok with one
#[tokio::test]
async fn static_admin_must_name_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::create_user(db).await?;
    let caller = AuthUser::static_admin();
    let service = ShiftRequestService::new(db, 5);

    assert!(matches!(
        service.resolve_target(&caller, None).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(service.resolve_target(&caller, Some(worker.id)).await?, worker.id);

    Ok(())
}
