use super::*;

/// Tests resolving a signed token.
///
/// Expected: Ok(AuthUser) for the token's user with the signed-token method
#[tokio::test]
async fn resolves_signed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db, None);

    let user = factory::create_user(db).await?;
    let headers = bearer(&state.tokens.issue(&user)?);

    let caller = AuthGuard::new(&state, &headers).authenticate().await?;

    assert_eq!(caller.id, user.id);
    assert_eq!(caller.email, user.email);
    assert_eq!(caller.role, UserRole::Worker);
    assert_eq!(caller.method, AuthMethod::SignedToken);

    Ok(())
}

/// Tests requests without a bearer token.
///
/// Expected: Err(MissingToken) for no header and for a non-bearer scheme
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db, None);

    let empty = HeaderMap::new();
    assert!(matches!(
        AuthGuard::new(&state, &empty).authenticate().await,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    assert!(matches!(
        AuthGuard::new(&state, &basic).authenticate().await,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db, None);

    let user = factory::create_user(db).await?;
    let foreign = TokenService::new("other-secret".to_string(), 60).issue(&user)?;
    let headers = bearer(&foreign);

    assert!(matches!(
        AuthGuard::new(&state, &headers).authenticate().await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was soft-deleted afterwards.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db, None);

    let user = factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;
    let headers = bearer(&state.tokens.issue(&user)?);

    assert!(matches!(
        AuthGuard::new(&state, &headers).authenticate().await,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests the static admin token.
///
/// Expected: Ok with the fixed static admin identity
#[tokio::test]
async fn resolves_static_admin_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db, Some(STATIC_TOKEN));
    let headers = bearer(STATIC_TOKEN);

    let caller = AuthGuard::new(&state, &headers).authenticate().await?;

    assert_eq!(caller.id, STATIC_ADMIN_ID);
    assert_eq!(caller.email, STATIC_ADMIN_EMAIL);
    assert_eq!(caller.role, UserRole::Admin);
    assert_eq!(caller.method, AuthMethod::StaticAdminToken);

    Ok(())
}

/// Tests the static token when the bypass is disabled.
///
/// Expected: Err(InvalidToken), the value is treated as an ordinary token
#[tokio::test]
async fn ignores_static_token_when_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db, None);
    let headers = bearer(STATIC_TOKEN);

    assert!(matches!(
        AuthGuard::new(&state, &headers).authenticate().await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
