use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::Worker,
        created_by: email.to_string(),
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores every field and stamps the creation audit
/// columns.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com")).await?;

    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::Worker);
    assert_eq!(user.created_by, "ada@example.com");
    assert!(user.deleted_at.is_none());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Verifies that inserting a second user with the same email fails with a
/// unique-constraint violation.
///
/// Expected: Err with UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("ada@example.com")).await?;
    let result = repo.create(params("ada@example.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
