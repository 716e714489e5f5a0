use super::*;

/// Tests listing assignments with user and shift details.
///
/// Expected: Ok with each row joined to its user, shift and role
#[tokio::test]
async fn lists_assignments_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Ada")
        .last_name("Lovelace")
        .email("ada@example.com")
        .build()
        .await?;
    let role = factory::shift_role::ShiftRoleFactory::new(db)
        .role_name("Cleaner")
        .build()
        .await?;
    let shift = factory::shift::ShiftFactory::new(db, role.id)
        .date(date(2025, 6, 5))
        .times(time(7, 0), time(11, 0))
        .build()
        .await?;
    let assignment = factory::create_assignment(db, user.id, shift.id).await?;

    let (items, total) = AssignmentRepository::new(db)
        .get_paginated(AssignmentFilter::default())
        .await?;

    assert_eq!(total, 1);
    let item = &items[0];
    assert_eq!(item.id, assignment.id);
    assert_eq!(item.first_name.as_deref(), Some("Ada"));
    assert_eq!(item.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(item.email.as_deref(), Some("ada@example.com"));
    assert_eq!(item.shift_date, Some(date(2025, 6, 5)));
    assert_eq!(item.shift_start_time, Some(time(7, 0)));
    assert_eq!(item.shift_end_time, Some(time(11, 0)));
    assert_eq!(item.shift_role_name.as_deref(), Some("Cleaner"));

    Ok(())
}

/// Tests scoping the list to one user and paging.
///
/// Expected: Ok with the user's newest assignment only and a total of 2
#[tokio::test]
async fn scopes_to_user_and_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;

    let mut shifts = Vec::new();
    for _ in 0..4 {
        shifts.push(factory::create_shift(db, role.id).await?);
    }

    factory::create_assignment(db, user.id, shifts[0].id).await?;
    let newest = factory::create_assignment(db, user.id, shifts[1].id).await?;
    factory::create_assignment(db, other.id, shifts[2].id).await?;
    factory::assignment::AssignmentFactory::new(db, user.id, shifts[3].id)
        .deleted(true)
        .build()
        .await?;

    let (items, total) = AssignmentRepository::new(db)
        .get_paginated(AssignmentFilter {
            user_id: Some(user.id),
            page: PageRequest::new(1, 0),
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, newest.id);

    Ok(())
}
