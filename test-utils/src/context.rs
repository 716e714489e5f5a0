use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// Test context containing the database connection.
///
/// Provides an in-memory SQLite database for isolated tests. The connection is
/// created lazily on first access and lives as long as the context.
pub struct TestContext {
    /// Database connection to the in-memory SQLite instance.
    ///
    /// `None` until `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// The pool is capped at a single connection so every query, including those
    /// issued inside transactions, sees the same in-memory database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opt = ConnectOptions::new("sqlite::memory:");
                opt.max_connections(1).sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Executes raw SQL statements against the test database.
    ///
    /// # Arguments
    /// - `statements` - SQL strings to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All statements executed
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_statements(&mut self, statements: Vec<String>) -> Result<(), TestError> {
        let db = self.database().await?;

        for sql in statements {
            db.execute_unprepared(&sql).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
