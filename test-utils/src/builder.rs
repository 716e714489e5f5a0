use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{ShiftRole, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ShiftRole)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL statements executed after every table has been created.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement to run once the tables exist.
    ///
    /// # Arguments
    /// - `sql` - Statement to execute, such as an index definition
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_statement(mut self, sql: impl Into<String>) -> Self {
        self.statements.push(sql.into());
        self
    }

    /// Adds every roster table plus the active-assignment unique index.
    ///
    /// Tables are added in dependency order:
    /// - User
    /// - ShiftRole
    /// - Shift
    /// - ShiftRequest
    /// - WorkerShiftAssignment
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_roster_tables(self) -> Self {
        self.with_table(User)
            .with_table(ShiftRole)
            .with_table(Shift)
            .with_table(ShiftRequest)
            .with_table(WorkerShiftAssignment)
            .with_statement(migration::ACTIVE_ASSIGNMENT_INDEX_SQL)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
