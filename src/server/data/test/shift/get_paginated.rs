use super::*;

/// Tests paging through shifts.
///
/// Verifies newest-first ordering, the page window, and that the total counts
/// every live shift.
///
/// Expected: Ok with 2 shifts on the second page of 2 and total of 3
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::create_shift_role(db).await?;
    let first = factory::create_shift(db, role.id).await?;
    let second = factory::create_shift(db, role.id).await?;
    let third = factory::create_shift(db, role.id).await?;
    factory::shift::ShiftFactory::new(db, role.id)
        .deleted(true)
        .build()
        .await?;

    let repo = ShiftRepository::new(db);

    let (page_one, total) = repo
        .get_paginated(ShiftFilter {
            only_unassigned: false,
            page: PageRequest::new(2, 0),
        })
        .await?;
    assert_eq!(total, 3);
    let ids: Vec<i32> = page_one.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);

    let (page_two, _) = repo
        .get_paginated(ShiftFilter {
            only_unassigned: false,
            page: PageRequest::new(2, 2),
        })
        .await?;
    let ids: Vec<i32> = page_two.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id]);

    Ok(())
}

/// Tests the unassigned filter.
///
/// Verifies that shifts with an active assignment are excluded, while a shift whose
/// only assignment was soft-deleted is included.
///
/// Expected: Ok with the two shifts lacking an active assignment
#[tokio::test]
async fn filters_assigned_shifts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_shift_role(db).await?;
    let assigned = factory::create_shift(db, role.id).await?;
    let released = factory::create_shift(db, role.id).await?;
    let open = factory::create_shift(db, role.id).await?;

    factory::create_assignment(db, user.id, assigned.id).await?;
    factory::assignment::AssignmentFactory::new(db, user.id, released.id)
        .deleted(true)
        .build()
        .await?;

    let (shifts, total) = ShiftRepository::new(db)
        .get_paginated(ShiftFilter {
            only_unassigned: true,
            page: PageRequest::default(),
        })
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = shifts.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![open.id, released.id]);

    Ok(())
}
