use super::*;

/// Tests finding a user by id.
///
/// Expected: Ok(Some) for a live user, Ok(None) once soft-deleted
#[tokio::test]
async fn finds_only_live_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_user(db).await?;
    let deleted = factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(live.id).await?.map(|u| u.id), Some(live.id));
    assert!(repo.find_by_id(deleted.id).await?.is_none());
    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}
