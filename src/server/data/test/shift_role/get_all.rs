use super::*;

/// Tests listing roles.
///
/// Verifies that deleted roles are skipped and the rest are sorted by name.
///
/// Expected: Ok with ["Cleaner", "Mover"]
#[tokio::test]
async fn lists_live_roles_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::shift_role::ShiftRoleFactory::new(db)
        .role_name("Mover")
        .build()
        .await?;
    factory::shift_role::ShiftRoleFactory::new(db)
        .role_name("Cleaner")
        .build()
        .await?;
    factory::shift_role::ShiftRoleFactory::new(db)
        .role_name("Archived")
        .deleted(true)
        .build()
        .await?;

    let roles = ShiftRoleRepository::new(db).get_all().await?;

    let names: Vec<&str> = roles.iter().map(|r| r.role_name.as_str()).collect();
    assert_eq!(names, vec!["Cleaner", "Mover"]);

    Ok(())
}
