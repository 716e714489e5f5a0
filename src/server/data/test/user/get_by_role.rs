use super::*;

/// Tests listing users by role.
///
/// Verifies that only live users with the requested role are returned, newest
/// first.
///
/// Expected: Ok with the two live workers in reverse creation order
#[tokio::test]
async fn lists_live_workers_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::user::create_admin(db).await?;
    factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let workers = UserRepository::new(db).get_by_role(UserRole::Worker).await?;

    let ids: Vec<i32> = workers.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(workers.iter().all(|u| u.role == UserRole::Worker));

    Ok(())
}
