use super::*;

/// Tests creating a shift role.
///
/// Expected: Ok with the role retrievable by id
#[tokio::test]
async fn creates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShiftRoleRepository::new(db);
    let role = repo.create("Cook".to_string(), "system".to_string()).await?;

    assert_eq!(role.role_name, "Cook");
    assert_eq!(repo.find_by_id(role.id).await?, Some(role));

    Ok(())
}

/// Expected: Ok(None) for a soft-deleted role
#[tokio::test]
async fn hides_deleted_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::shift_role::ShiftRoleFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    assert!(ShiftRoleRepository::new(db).find_by_id(role.id).await?.is_none());

    Ok(())
}
