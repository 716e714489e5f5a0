use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("grace@example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that soft-deleted users are invisible to email lookup.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .deleted(true)
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("gone@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Expected: Ok(None) for an email nobody registered
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
