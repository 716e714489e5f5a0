use super::*;

/// Tests soft deleting a shift.
///
/// Verifies that the row is kept with the deletion audit columns set and is no
/// longer readable through the repository. A second delete is a no-op.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn marks_shift_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_role, shift) = factory::helpers::create_shift_with_role(db).await?;
    let repo = ShiftRepository::new(db);

    assert!(repo.soft_delete(shift.id, "admin@example.com".to_string()).await?);
    assert!(repo.find_by_id(shift.id).await?.is_none());

    let row = entity::prelude::Shift::find_by_id(shift.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());
    assert_eq!(row.deleted_by.as_deref(), Some("admin@example.com"));

    assert!(!repo.soft_delete(shift.id, "admin@example.com".to_string()).await?);

    Ok(())
}
