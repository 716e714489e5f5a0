//! Roster Test Utils
//!
//! Provides shared testing utilities for the roster service. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, plus factories for
//! every roster entity.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, roles, shifts, requests and assignments
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_shift_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_roster_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
