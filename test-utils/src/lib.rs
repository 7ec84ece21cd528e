//! Pagecraft Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the page
//! composition engine. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas, plus factories for seeding
//! content rows.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **LogCapture**: Thread-scoped `tracing` subscriber that records log lines
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Page;
//!
//! #[tokio::test]
//! async fn test_page_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Page)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod log;
