//! Autoecole Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the driving
//! school server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for inserting test rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting the rows of every table, from categories to feed entries
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finishes_training() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_training_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_category, training) = factory::helpers::create_training_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
