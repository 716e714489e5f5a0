use super::*;

/// Tests creating a shift.
///
/// Verifies that the shift is stored active with the creating admin recorded and
/// that the role name is resolved.
///
/// Expected: Ok with shift created
#[tokio::test]
async fn creates_active_shift_with_role_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::shift_role::ShiftRoleFactory::new(db)
        .role_name("Cook")
        .build()
        .await?;

    let shift = ShiftRepository::new(db)
        .create(CreateShiftParams {
            date: date(2025, 6, 3),
            start_time: time(9, 0),
            end_time: time(17, 0),
            role_id: role.id,
            location: Some("Kitchen".to_string()),
            actor: "admin@example.com".to_string(),
        })
        .await?;

    assert_eq!(shift.date, date(2025, 6, 3));
    assert_eq!(shift.start_time, time(9, 0));
    assert_eq!(shift.end_time, time(17, 0));
    assert_eq!(shift.role_id, role.id);
    assert_eq!(shift.role_name.as_deref(), Some("Cook"));
    assert_eq!(shift.location.as_deref(), Some("Kitchen"));
    assert!(shift.is_active);
    assert_eq!(shift.created_by, "admin@example.com");
    assert!(shift.updated_at.is_none());

    Ok(())
}
